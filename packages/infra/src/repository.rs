//! # リポジトリ実装
//!
//! カテゴリとタスクの永続化を担当するリポジトリトレイトと PostgreSQL 実装。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存する
//! - **採番は DB**: `insert` は作成前の値を受け取り、採番済みのエンティティを返す
//! - **存在しない行**: `find_by_id` は `None`、`delete` は `false` を返し、
//!   404 への変換はユースケース層で行う

pub mod category_repository;
pub mod task_repository;

pub use category_repository::{CategoryRepository, PostgresCategoryRepository};
pub use task_repository::{PostgresTaskRepository, TaskRepository};
