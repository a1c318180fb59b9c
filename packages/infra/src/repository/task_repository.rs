//! # TaskRepository
//!
//! タスクの永続化を担当するリポジトリ。
//!
//! `user_id` は INSERT 時にのみ書き込み、UPDATE 文には含めない。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kanban_domain::{
    DomainError,
    category::CategoryId,
    task::{NewTask, Task, TaskDescription, TaskId, TaskTitle},
    user::UserId,
};
use sqlx::PgPool;

use crate::error::InfraError;

/// タスクリポジトリトレイト
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// 全タスクを ID 順で取得する
    async fn find_all(&self) -> Result<Vec<Task>, InfraError>;

    /// ID でタスクを検索する
    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, InfraError>;

    /// タスクを挿入し、採番されたエンティティを返す
    async fn insert(&self, task: &NewTask) -> Result<Task, InfraError>;

    /// タスクを更新する（タイトル・説明・ステータス・カテゴリ・更新日時）
    ///
    /// 対象が存在しなかった場合は `false` を返す。
    async fn update(&self, task: &Task) -> Result<bool, InfraError>;

    /// タスクを削除する。対象が存在しなかった場合は `false` を返す
    async fn delete(&self, id: TaskId) -> Result<bool, InfraError>;
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    id:          i64,
    title:       String,
    description: String,
    status:      bool,
    user_id:     i64,
    category_id: i64,
    created_at:  DateTime<Utc>,
    updated_at:  DateTime<Utc>,
}

impl TryFrom<TaskRow> for Task {
    type Error = InfraError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let corrupted = |e: DomainError| InfraError::unexpected(format!("tasks.id={}: {e}", row.id));
        let title = TaskTitle::new(row.title).map_err(corrupted)?;
        let description = TaskDescription::new(row.description).map_err(corrupted)?;
        Ok(Task::from_db(
            TaskId::new(row.id),
            title,
            description,
            row.status,
            UserId::new(row.user_id),
            CategoryId::new(row.category_id),
            row.created_at,
            row.updated_at,
        ))
    }
}

/// PostgreSQL 実装の TaskRepository
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Task>, InfraError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, description, status, user_id, category_id, created_at, updated_at
            FROM tasks
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Task::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, InfraError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, description, status, user_id, category_id, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Task::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(user_id = %task.user_id()))]
    async fn insert(&self, task: &NewTask) -> Result<Task, InfraError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO tasks (title, description, status, user_id, category_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(task.title().as_str())
        .bind(task.description().as_str())
        .bind(task.status())
        .bind(task.user_id().as_i64())
        .bind(task.category_id().as_i64())
        .bind(task.created_at())
        .bind(task.updated_at())
        .fetch_one(&self.pool)
        .await?;

        Ok(task.clone().into_task(TaskId::new(id)))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %task.id()))]
    async fn update(&self, task: &Task) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = $2, description = $3, status = $4, category_id = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(task.id().as_i64())
        .bind(task.title().as_str())
        .bind(task.description().as_str())
        .bind(task.status())
        .bind(task.category_id().as_i64())
        .bind(task.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: TaskId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
