//! タスク管理ユースケース
//!
//! 作成時と更新時に所属カテゴリの存在を確認する。所有者の確認はハンドラが
//! 更新内容を重ねる前に行うため、ここでは扱わない。

use std::sync::Arc;

use async_trait::async_trait;
use kanban_domain::{
    category::CategoryId,
    clock::Clock,
    task::{NewTask, Task, TaskDescription, TaskId, TaskTitle},
    user::UserId,
};
use kanban_infra::repository::{CategoryRepository, TaskRepository};

use super::helpers::FindResultExt;
use crate::error::ApiError;

/// タスク作成の入力
///
/// `user_id` は認証済みの操作主体から設定する。
pub struct StoreTaskInput {
    pub title:       TaskTitle,
    pub description: TaskDescription,
    pub user_id:     UserId,
    pub category_id: CategoryId,
}

/// タスク管理ユースケース
#[async_trait]
pub trait TaskUseCase: Send + Sync {
    /// 全タスクを取得する
    async fn list(&self) -> Result<Vec<Task>, ApiError>;

    /// タスクを取得する。存在しなければ `NotFound`
    async fn get(&self, id: TaskId) -> Result<Task, ApiError>;

    /// 未完了のタスクを作成する
    async fn store(&self, input: StoreTaskInput) -> Result<Task, ApiError>;

    /// 変更済みのタスクを保存し、更新日時を記録した結果を返す
    async fn update(&self, task: Task) -> Result<Task, ApiError>;

    /// タスクを削除する。存在しなければ `NotFound`
    async fn delete(&self, id: TaskId) -> Result<(), ApiError>;
}

pub struct TaskUseCaseImpl {
    task_repository:     Arc<dyn TaskRepository>,
    category_repository: Arc<dyn CategoryRepository>,
    clock:               Arc<dyn Clock>,
}

impl TaskUseCaseImpl {
    pub fn new(
        task_repository: Arc<dyn TaskRepository>,
        category_repository: Arc<dyn CategoryRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            task_repository,
            category_repository,
            clock,
        }
    }

    async fn ensure_category_exists(&self, id: CategoryId) -> Result<(), ApiError> {
        self.category_repository
            .find_by_id(id)
            .await
            .or_not_found("カテゴリ", id)
            .map(|_| ())
    }
}

#[async_trait]
impl TaskUseCase for TaskUseCaseImpl {
    async fn list(&self) -> Result<Vec<Task>, ApiError> {
        Ok(self.task_repository.find_all().await?)
    }

    async fn get(&self, id: TaskId) -> Result<Task, ApiError> {
        self.task_repository
            .find_by_id(id)
            .await
            .or_not_found("タスク", id)
    }

    async fn store(&self, input: StoreTaskInput) -> Result<Task, ApiError> {
        self.ensure_category_exists(input.category_id).await?;

        let draft = NewTask::new(
            input.title,
            input.description,
            input.user_id,
            input.category_id,
            self.clock.now(),
        );
        let task = self.task_repository.insert(&draft).await?;
        tracing::info!(task_id = %task.id(), user_id = %task.user_id(), "タスクを作成しました");
        Ok(task)
    }

    async fn update(&self, task: Task) -> Result<Task, ApiError> {
        self.ensure_category_exists(task.category_id()).await?;

        let task = task.touched(self.clock.now());
        if !self.task_repository.update(&task).await? {
            return Err(ApiError::NotFound(format!(
                "タスクが見つかりません: {}",
                task.id()
            )));
        }
        Ok(task)
    }

    async fn delete(&self, id: TaskId) -> Result<(), ApiError> {
        if !self.task_repository.delete(id).await? {
            return Err(ApiError::NotFound(format!("タスクが見つかりません: {id}")));
        }
        tracing::info!(task_id = %id, "タスクを削除しました");
        Ok(())
    }
}
