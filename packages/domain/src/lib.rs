//! # Kanban ドメイン層
//!
//! カンバンボードのカテゴリとタスクを表現するドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`category`] - カテゴリ（ボードの列）
//! - [`task`] - タスク（カード）と所有者チェック
//! - [`user`] - 操作主体の識別子とロール
//! - [`clock`] - 時刻プロバイダ
//! - [`error`] - ドメイン層で発生するエラーの定義
//!
//! ## 使用例
//!
//! ```rust
//! use kanban_domain::{DomainError, category::CategoryType};
//!
//! let backlog = CategoryType::new("Backlog").unwrap();
//! assert_eq!(backlog.as_str(), "Backlog");
//!
//! let error = CategoryType::new("   ").unwrap_err();
//! assert!(matches!(error, DomainError::Validation(_)));
//! ```

#[macro_use]
mod macros;

pub mod category;
pub mod clock;
pub mod error;
pub mod task;
pub mod user;

pub use error::DomainError;
