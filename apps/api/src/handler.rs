//! # HTTP リクエストハンドラ
//!
//! ## 設計方針
//!
//! - 各リソースのハンドラはサブモジュールに配置し、ここで re-export する
//! - バインドと必須項目の検証は extractor（[`crate::extract`]）が済ませる
//! - ハンドラは「読み込み → 所有者確認 → 更新内容の上書き → 保存」の順序だけを組み立て、
//!   存在確認と更新日時の記録はユースケースに委譲する
//!
//! ## レスポンス形式
//!
//! | 操作 | ステータス | ボディ |
//! |------|-----------|--------|
//! | 一覧 | 200 | `{ "code": 200, "data": [...] }` |
//! | 作成 | 201 | `{ "code": 201, "data": { id, ..., created_at } }` |
//! | 更新 | 200 | `{ "code": 200, "data": { id, ..., updated_at } }` |
//! | 削除 | 200 | `{ "message": "<resource> has been successfully deleted" }` |

pub mod category;
pub mod health;
pub mod task;

pub use category::{
    CategoryState,
    delete_category,
    list_categories,
    store_category,
    update_category,
};
pub use health::health_check;
pub use task::{
    TaskState,
    delete_task,
    list_tasks,
    store_task,
    update_task,
    update_task_category,
    update_task_status,
};
