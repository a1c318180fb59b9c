//! # CategoryRepository
//!
//! カテゴリの永続化を担当するリポジトリ。
//!
//! カテゴリを削除すると、所属するタスクも外部キー（`ON DELETE CASCADE`）で削除される。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kanban_domain::category::{Category, CategoryId, CategoryType, NewCategory};
use sqlx::PgPool;

use crate::error::InfraError;

/// カテゴリリポジトリトレイト
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// 全カテゴリを ID 順で取得する
    async fn find_all(&self) -> Result<Vec<Category>, InfraError>;

    /// ID でカテゴリを検索する
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, InfraError>;

    /// カテゴリを挿入し、採番されたエンティティを返す
    async fn insert(&self, category: &NewCategory) -> Result<Category, InfraError>;

    /// カテゴリを更新する。対象が存在しなかった場合は `false` を返す
    async fn update(&self, category: &Category) -> Result<bool, InfraError>;

    /// カテゴリを削除する。対象が存在しなかった場合は `false` を返す
    async fn delete(&self, id: CategoryId) -> Result<bool, InfraError>;
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id:            i64,
    category_type: String,
    created_at:    DateTime<Utc>,
    updated_at:    DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = InfraError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        let category_type = CategoryType::new(row.category_type)
            .map_err(|e| InfraError::unexpected(format!("categories.id={}: {e}", row.id)))?;
        Ok(Category::from_db(
            CategoryId::new(row.id),
            category_type,
            row.created_at,
            row.updated_at,
        ))
    }
}

/// PostgreSQL 実装の CategoryRepository
#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Category>, InfraError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, type AS category_type, created_at, updated_at
            FROM categories
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Category::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, InfraError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, type AS category_type, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Category::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, category: &NewCategory) -> Result<Category, InfraError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO categories (type, created_at, updated_at)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(category.category_type().as_str())
        .bind(category.created_at())
        .bind(category.updated_at())
        .fetch_one(&self.pool)
        .await?;

        Ok(category.clone().into_category(CategoryId::new(id)))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %category.id()))]
    async fn update(&self, category: &Category) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE categories
            SET type = $2, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(category.id().as_i64())
        .bind(category.category_type().as_str())
        .bind(category.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: CategoryId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
