//! # カテゴリハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /categories/` - カテゴリ一覧
//! - `POST /categories/` - カテゴリ作成（`user` ロール）
//! - `PATCH /categories/{id}` - カテゴリ種別の変更（`user` ロール）
//! - `DELETE /categories/{id}` - カテゴリ削除（`user` ロール、所属タスクも削除される）

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use kanban_domain::category::{Category, CategoryId, CategoryType};
use kanban_shared::{ApiResponse, MessageResponse};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    error::ApiError,
    extract::{IdPath, ValidatedJson},
    usecase::CategoryUseCase,
};

/// カテゴリ API の共有状態
pub struct CategoryState {
    pub usecase: Arc<dyn CategoryUseCase>,
}

// --- リクエスト/レスポンス型 ---

/// カテゴリ作成リクエスト
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[serde(rename = "type", default)]
    #[validate(length(min = 1, message = "type は必須です"))]
    pub category_type: String,
}

/// カテゴリ更新リクエスト
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[serde(rename = "type", default)]
    #[validate(length(min = 1, message = "type は必須です"))]
    pub category_type: String,
}

impl UpdateCategoryRequest {
    /// 既存のカテゴリに種別だけを上書きする
    pub fn apply_to(self, category: Category) -> Result<Category, ApiError> {
        let category_type = CategoryType::new(self.category_type)?;
        Ok(category.with_type(category_type))
    }
}

/// カテゴリ DTO（一覧）
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryDto {
    pub id:            i64,
    #[serde(rename = "type")]
    pub category_type: String,
    pub created_at:    DateTime<Utc>,
    pub updated_at:    DateTime<Utc>,
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            id:            category.id().as_i64(),
            category_type: category.category_type().to_string(),
            created_at:    category.created_at(),
            updated_at:    category.updated_at(),
        }
    }
}

/// 作成直後のカテゴリ DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryCreatedDto {
    pub id:            i64,
    #[serde(rename = "type")]
    pub category_type: String,
    pub created_at:    DateTime<Utc>,
}

impl From<&Category> for CategoryCreatedDto {
    fn from(category: &Category) -> Self {
        Self {
            id:            category.id().as_i64(),
            category_type: category.category_type().to_string(),
            created_at:    category.created_at(),
        }
    }
}

/// 更新直後のカテゴリ DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryUpdatedDto {
    pub id:            i64,
    #[serde(rename = "type")]
    pub category_type: String,
    pub updated_at:    DateTime<Utc>,
}

impl From<&Category> for CategoryUpdatedDto {
    fn from(category: &Category) -> Self {
        Self {
            id:            category.id().as_i64(),
            category_type: category.category_type().to_string(),
            updated_at:    category.updated_at(),
        }
    }
}

// --- ハンドラ ---

/// GET /categories/
#[tracing::instrument(skip_all)]
pub async fn list_categories(
    State(state): State<Arc<CategoryState>>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state.usecase.list().await?;

    let items: Vec<CategoryDto> = categories.iter().map(CategoryDto::from).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(items))))
}

/// POST /categories/
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたカテゴリ
/// - `400 Bad Request`: `type` が空
#[tracing::instrument(skip_all)]
pub async fn store_category(
    State(state): State<Arc<CategoryState>>,
    ValidatedJson(req): ValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let category_type = CategoryType::new(req.category_type)?;

    let category = state.usecase.store(category_type).await?;

    let response = ApiResponse::created(CategoryCreatedDto::from(&category));
    Ok((StatusCode::CREATED, Json(response)))
}

/// PATCH /categories/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のカテゴリ
/// - `400 Bad Request`: `type` が空
/// - `404 Not Found`: カテゴリが存在しない
#[tracing::instrument(skip_all, fields(category_id = id))]
pub async fn update_category(
    State(state): State<Arc<CategoryState>>,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let category = state.usecase.get(CategoryId::new(id)).await?;
    let category = req.apply_to(category)?;

    let updated = state.usecase.update(category).await?;

    let response = ApiResponse::ok(CategoryUpdatedDto::from(&updated));
    Ok((StatusCode::OK, Json(response)))
}

/// DELETE /categories/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 削除完了メッセージ
/// - `404 Not Found`: カテゴリが存在しない
#[tracing::instrument(skip_all, fields(category_id = id))]
pub async fn delete_category(
    State(state): State<Arc<CategoryState>>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, ApiError> {
    state.usecase.delete(CategoryId::new(id)).await?;

    Ok((StatusCode::OK, Json(MessageResponse::deleted("category"))))
}
