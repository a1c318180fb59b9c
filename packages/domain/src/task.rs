//! # タスク
//!
//! カンバンボード上のカードを表現するドメインモデル。
//!
//! ## 状態
//!
//! `status` は `false`（未完了）と `true`（完了）の 2 値で、終端状態は無い。
//! 状態変更はステータス更新操作でのみ行い、同じ値の再設定は冪等である。
//!
//! ## 所有者
//!
//! `user_id` は作成時に操作主体から設定され、以後変更されない。
//! 作成以外の変更・削除は所有者本人のみに許可する（[`Task::ensure_owned_by`]）。
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::Utc;
//! use kanban_domain::{
//!     category::CategoryId,
//!     task::{NewTask, TaskDescription, TaskTitle},
//!     user::UserId,
//! };
//!
//! let draft = NewTask::new(
//!     TaskTitle::new("Fix bug").unwrap(),
//!     TaskDescription::new("desc").unwrap(),
//!     UserId::new(42),
//!     CategoryId::new(1),
//!     Utc::now(),
//! );
//! assert!(!draft.status());
//! ```

use chrono::{DateTime, Utc};

use crate::{DomainError, category::CategoryId, user::UserId};

define_i64_id! {
    /// タスクの一意識別子
    pub struct TaskId;
}

define_validated_string! {
    /// タスクのタイトル
    pub struct TaskTitle {
        label: "タイトル",
        max_length: 255,
    }
}

define_validated_string! {
    /// タスクの説明
    pub struct TaskDescription {
        label: "説明",
        max_length: 10_000,
    }
}

/// 作成前のタスク
///
/// ステータスは常に未完了（`false`）で始まる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title:       TaskTitle,
    description: TaskDescription,
    user_id:     UserId,
    category_id: CategoryId,
    created_at:  DateTime<Utc>,
}

impl NewTask {
    pub fn new(
        title: TaskTitle,
        description: TaskDescription,
        user_id: UserId,
        category_id: CategoryId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            description,
            user_id,
            category_id,
            created_at: now,
        }
    }

    pub fn title(&self) -> &TaskTitle {
        &self.title
    }

    pub fn description(&self) -> &TaskDescription {
        &self.description
    }

    pub fn status(&self) -> bool {
        false
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 採番された ID を付与してエンティティにする
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            status: false,
            user_id: self.user_id,
            category_id: self.category_id,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// タスクエンティティ
///
/// # 不変条件
///
/// - `title` / `description` は空ではない
/// - `user_id` は作成後に変わらない（変更用メソッドを持たない）
/// - `created_at <= updated_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id:          TaskId,
    title:       TaskTitle,
    description: TaskDescription,
    status:      bool,
    user_id:     UserId,
    category_id: CategoryId,
    created_at:  DateTime<Utc>,
    updated_at:  DateTime<Utc>,
}

impl Task {
    /// データベースからタスクを復元する
    #[allow(clippy::too_many_arguments)]
    pub fn from_db(
        id: TaskId,
        title: TaskTitle,
        description: TaskDescription,
        status: bool,
        user_id: UserId,
        category_id: CategoryId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            status,
            user_id,
            category_id,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &TaskTitle {
        &self.title
    }

    pub fn description(&self) -> &TaskDescription {
        &self.description
    }

    pub fn status(&self) -> bool {
        self.status
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// 操作主体がタスクの所有者であることを確認する
    ///
    /// # Errors
    ///
    /// 所有者以外の場合は `DomainError::Forbidden` を返す。
    pub fn ensure_owned_by(&self, user_id: UserId) -> Result<(), DomainError> {
        if self.is_owned_by(user_id) {
            return Ok(());
        }
        Err(DomainError::Forbidden(format!(
            "タスク {} を操作する権限がありません",
            self.id
        )))
    }

    /// タイトルと説明を変更した新しいインスタンスを返す
    pub fn with_details(self, title: TaskTitle, description: TaskDescription) -> Self {
        Self {
            title,
            description,
            ..self
        }
    }

    /// ステータスを変更した新しいインスタンスを返す
    pub fn with_status(self, status: bool) -> Self {
        Self { status, ..self }
    }

    /// 所属カテゴリを変更した新しいインスタンスを返す
    pub fn with_category(self, category_id: CategoryId) -> Self {
        Self {
            category_id,
            ..self
        }
    }

    /// 更新日時を記録した新しいインスタンスを返す
    pub fn touched(self, now: DateTime<Utc>) -> Self {
        Self {
            updated_at: now,
            ..self
        }
    }
}
