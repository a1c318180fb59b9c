//! # カテゴリ
//!
//! カンバンボードの列（"Backlog", "Doing" など）を表現するドメインモデル。
//!
//! ID は DB が採番するため、作成前の状態は [`NewCategory`] で表し、
//! 永続化後に [`Category`] として復元する。
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::Utc;
//! use kanban_domain::category::{CategoryType, NewCategory};
//!
//! let draft = NewCategory::new(CategoryType::new("Backlog").unwrap(), Utc::now());
//! assert_eq!(draft.category_type().as_str(), "Backlog");
//! assert_eq!(draft.created_at(), draft.updated_at());
//! ```

use chrono::{DateTime, Utc};

define_i64_id! {
    /// カテゴリの一意識別子
    pub struct CategoryId;
}

define_validated_string! {
    /// カテゴリ種別（列名）
    pub struct CategoryType {
        label: "カテゴリ種別",
        max_length: 255,
    }
}

/// 作成前のカテゴリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    category_type: CategoryType,
    created_at:    DateTime<Utc>,
    updated_at:    DateTime<Utc>,
}

impl NewCategory {
    pub fn new(category_type: CategoryType, now: DateTime<Utc>) -> Self {
        Self {
            category_type,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn category_type(&self) -> &CategoryType {
        &self.category_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// 採番された ID を付与してエンティティにする
    pub fn into_category(self, id: CategoryId) -> Category {
        Category {
            id,
            category_type: self.category_type,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// カテゴリエンティティ
///
/// # 不変条件
///
/// - `category_type` は空ではない
/// - `created_at <= updated_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id:            CategoryId,
    category_type: CategoryType,
    created_at:    DateTime<Utc>,
    updated_at:    DateTime<Utc>,
}

impl Category {
    /// データベースからカテゴリを復元する
    pub fn from_db(
        id: CategoryId,
        category_type: CategoryType,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            category_type,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn category_type(&self) -> &CategoryType {
        &self.category_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// 種別を変更した新しいインスタンスを返す
    pub fn with_type(self, category_type: CategoryType) -> Self {
        Self {
            category_type,
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
