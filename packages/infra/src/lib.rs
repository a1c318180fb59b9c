//! # Kanban インフラ層
//!
//! PostgreSQL との接続とリポジトリ実装を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! リポジトリはトレイトとして公開し、ユースケース層は `Arc<dyn ...>` で受け取る。
//! PostgreSQL 実装と、テスト用のインメモリ実装（`test-utils` feature）を差し替えられる。
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL 接続プールとマイグレーション
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと PostgreSQL 実装
//! - `mock` - インメモリ実装（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use kanban_infra::{db, repository::PostgresTaskRepository};
//!
//! let pool = db::create_pool("postgres://localhost/kanban", 10).await?;
//! db::run_migrations(&pool).await?;
//! let tasks = PostgresTaskRepository::new(pool);
//! ```

pub mod db;
pub mod error;
#[cfg(feature = "test-utils")]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
