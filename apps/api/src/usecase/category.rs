//! カテゴリ管理ユースケース

use std::sync::Arc;

use async_trait::async_trait;
use kanban_domain::{
    category::{Category, CategoryId, CategoryType, NewCategory},
    clock::Clock,
};
use kanban_infra::repository::CategoryRepository;

use super::helpers::FindResultExt;
use crate::error::ApiError;

/// カテゴリ管理ユースケース
#[async_trait]
pub trait CategoryUseCase: Send + Sync {
    /// 全カテゴリを取得する
    async fn list(&self) -> Result<Vec<Category>, ApiError>;

    /// カテゴリを取得する。存在しなければ `NotFound`
    async fn get(&self, id: CategoryId) -> Result<Category, ApiError>;

    /// カテゴリを作成する
    async fn store(&self, category_type: CategoryType) -> Result<Category, ApiError>;

    /// 変更済みのカテゴリを保存し、更新日時を記録した結果を返す
    async fn update(&self, category: Category) -> Result<Category, ApiError>;

    /// カテゴリを削除する。存在しなければ `NotFound`
    async fn delete(&self, id: CategoryId) -> Result<(), ApiError>;
}

pub struct CategoryUseCaseImpl {
    category_repository: Arc<dyn CategoryRepository>,
    clock:               Arc<dyn Clock>,
}

impl CategoryUseCaseImpl {
    pub fn new(category_repository: Arc<dyn CategoryRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            category_repository,
            clock,
        }
    }
}

#[async_trait]
impl CategoryUseCase for CategoryUseCaseImpl {
    async fn list(&self) -> Result<Vec<Category>, ApiError> {
        Ok(self.category_repository.find_all().await?)
    }

    async fn get(&self, id: CategoryId) -> Result<Category, ApiError> {
        self.category_repository
            .find_by_id(id)
            .await
            .or_not_found("カテゴリ", id)
    }

    async fn store(&self, category_type: CategoryType) -> Result<Category, ApiError> {
        let draft = NewCategory::new(category_type, self.clock.now());
        let category = self.category_repository.insert(&draft).await?;
        tracing::info!(category_id = %category.id(), "カテゴリを作成しました");
        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Category, ApiError> {
        let category = category.touched(self.clock.now());
        if !self.category_repository.update(&category).await? {
            return Err(ApiError::NotFound(format!(
                "カテゴリが見つかりません: {}",
                category.id()
            )));
        }
        Ok(category)
    }

    async fn delete(&self, id: CategoryId) -> Result<(), ApiError> {
        if !self.category_repository.delete(id).await? {
            return Err(ApiError::NotFound(format!("カテゴリが見つかりません: {id}")));
        }
        tracing::info!(category_id = %id, "カテゴリを削除しました");
        Ok(())
    }
}
