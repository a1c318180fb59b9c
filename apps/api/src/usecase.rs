//! # ユースケース層
//!
//! ハンドラとリポジトリの間で、存在確認・採番後の復元・更新日時の記録を担う。
//!
//! ハンドラは `Arc<dyn CategoryUseCase>` / `Arc<dyn TaskUseCase>` として受け取るため、
//! テストではリポジトリ実装ごと差し替えられる。

mod category;
mod helpers;
mod task;

pub use category::{CategoryUseCase, CategoryUseCaseImpl};
pub use task::{StoreTaskInput, TaskUseCase, TaskUseCaseImpl};
