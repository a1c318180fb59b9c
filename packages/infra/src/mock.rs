//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! kanban-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! ID は PostgreSQL の `BIGSERIAL` と同じく 1 から連番で採番する。
//! [`MockCategoryRepository::cascading_to`] で作成したカテゴリリポジトリは、
//! `ON DELETE CASCADE` と同じくカテゴリ削除時に所属タスクも削除する。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kanban_domain::{
    category::{Category, CategoryId, NewCategory},
    task::{NewTask, Task, TaskId},
};

use crate::{
    error::InfraError,
    repository::{CategoryRepository, TaskRepository},
};

// ===== MockCategoryRepository =====

#[derive(Clone, Default)]
pub struct MockCategoryRepository {
    categories: Arc<Mutex<Vec<Category>>>,
    last_id:    Arc<Mutex<i64>>,
    cascade_to: Option<MockTaskRepository>,
}

impl MockCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 削除時に `tasks` 内の所属タスクも削除するリポジトリを作成する
    pub fn cascading_to(tasks: &MockTaskRepository) -> Self {
        Self {
            cascade_to: Some(tasks.clone()),
            ..Self::default()
        }
    }

    /// 既存のカテゴリを登録する（採番カウンタも追従させる）
    pub fn add_category(&self, category: Category) {
        let mut last_id = self.last_id.lock().unwrap();
        *last_id = (*last_id).max(category.id().as_i64());
        self.categories.lock().unwrap().push(category);
    }

    /// 現在保持しているカテゴリのスナップショットを返す
    pub fn snapshot(&self) -> Vec<Category> {
        self.categories.lock().unwrap().clone()
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, InfraError> {
        let mut categories = self.snapshot();
        categories.sort_by_key(Category::id);
        Ok(categories)
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, InfraError> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }

    async fn insert(&self, category: &NewCategory) -> Result<Category, InfraError> {
        let mut last_id = self.last_id.lock().unwrap();
        *last_id += 1;
        let created = category.clone().into_category(CategoryId::new(*last_id));
        self.categories.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, category: &Category) -> Result<bool, InfraError> {
        let mut categories = self.categories.lock().unwrap();
        let Some(existing) = categories.iter_mut().find(|c| c.id() == category.id()) else {
            return Ok(false);
        };
        *existing = category.clone();
        Ok(true)
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, InfraError> {
        let deleted = {
            let mut categories = self.categories.lock().unwrap();
            let before = categories.len();
            categories.retain(|c| c.id() != id);
            categories.len() < before
        };
        if let (true, Some(tasks)) = (deleted, &self.cascade_to) {
            tasks.remove_by_category(id);
        }
        Ok(deleted)
    }
}

// ===== MockTaskRepository =====

#[derive(Clone, Default)]
pub struct MockTaskRepository {
    tasks:   Arc<Mutex<Vec<Task>>>,
    last_id: Arc<Mutex<i64>>,
}

impl MockTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存のタスクを登録する（採番カウンタも追従させる）
    pub fn add_task(&self, task: Task) {
        let mut last_id = self.last_id.lock().unwrap();
        *last_id = (*last_id).max(task.id().as_i64());
        self.tasks.lock().unwrap().push(task);
    }

    /// 現在保持しているタスクのスナップショットを返す
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }

    fn remove_by_category(&self, category_id: CategoryId) {
        self.tasks
            .lock()
            .unwrap()
            .retain(|t| t.category_id() != category_id);
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn find_all(&self) -> Result<Vec<Task>, InfraError> {
        let mut tasks = self.snapshot();
        tasks.sort_by_key(Task::id);
        Ok(tasks)
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, InfraError> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn insert(&self, task: &NewTask) -> Result<Task, InfraError> {
        let mut last_id = self.last_id.lock().unwrap();
        *last_id += 1;
        let created = task.clone().into_task(TaskId::new(*last_id));
        self.tasks.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, task: &Task) -> Result<bool, InfraError> {
        let mut tasks = self.tasks.lock().unwrap();
        let Some(existing) = tasks.iter_mut().find(|t| t.id() == task.id()) else {
            return Ok(false);
        };
        *existing = task.clone();
        Ok(true)
    }

    async fn delete(&self, id: TaskId) -> Result<bool, InfraError> {
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| t.id() != id);
        Ok(tasks.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use kanban_domain::{
        category::CategoryType,
        task::{TaskDescription, TaskTitle},
        user::UserId,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[tokio::test]
    async fn test_insertは1から連番で採番する() {
        let sut = MockCategoryRepository::new();
        let draft = NewCategory::new(CategoryType::new("Backlog").unwrap(), fixed_now());

        let first = sut.insert(&draft).await.unwrap();
        let second = sut.insert(&draft).await.unwrap();

        assert_eq!(first.id(), CategoryId::new(1));
        assert_eq!(second.id(), CategoryId::new(2));
    }

    #[tokio::test]
    async fn test_add_category後のinsertは既存idの次から採番する() {
        let sut = MockCategoryRepository::new();
        sut.add_category(Category::from_db(
            CategoryId::new(5),
            CategoryType::new("Doing").unwrap(),
            fixed_now(),
            fixed_now(),
        ));
        let draft = NewCategory::new(CategoryType::new("Backlog").unwrap(), fixed_now());

        let created = sut.insert(&draft).await.unwrap();

        assert_eq!(created.id(), CategoryId::new(6));
    }

    #[tokio::test]
    async fn test_存在しないidのdeleteはfalseを返す() {
        let sut = MockTaskRepository::new();

        let deleted = sut.delete(TaskId::new(999)).await.unwrap();

        assert!(!deleted);
    }

    fn task_in(id: i64, category_id: i64) -> Task {
        Task::from_db(
            TaskId::new(id),
            TaskTitle::new("Fix bug").unwrap(),
            TaskDescription::new("desc").unwrap(),
            false,
            UserId::new(42),
            CategoryId::new(category_id),
            fixed_now(),
            fixed_now(),
        )
    }

    fn category(id: i64) -> Category {
        Category::from_db(
            CategoryId::new(id),
            CategoryType::new("Backlog").unwrap(),
            fixed_now(),
            fixed_now(),
        )
    }

    #[tokio::test]
    async fn test_cascading_toで作成するとカテゴリ削除で所属タスクも消える() {
        // Given
        let tasks = MockTaskRepository::new();
        tasks.add_task(task_in(1, 1));
        tasks.add_task(task_in(2, 2));
        let sut = MockCategoryRepository::cascading_to(&tasks);
        sut.add_category(category(1));
        sut.add_category(category(2));

        // When
        let deleted = sut.delete(CategoryId::new(1)).await.unwrap();

        // Then
        assert!(deleted);
        assert_eq!(tasks.snapshot(), vec![task_in(2, 2)]);
    }

    #[tokio::test]
    async fn test_存在しない行のupdateはfalseを返し何も追加しない() {
        let categories = MockCategoryRepository::new();
        let tasks = MockTaskRepository::new();

        let category_updated = categories.update(&category(1)).await.unwrap();
        let task_updated = tasks.update(&task_in(1, 1)).await.unwrap();

        assert!(!category_updated);
        assert!(!task_updated);
        assert!(categories.snapshot().is_empty());
        assert!(tasks.snapshot().is_empty());
    }
}
