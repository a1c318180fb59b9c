//! # メッセージレスポンス
//!
//! `{ "message": "..." }` 形式のレスポンス。エラーと削除完了通知の両方で使う。

use serde::{Deserialize, Serialize};

/// メッセージのみを返すレスポンス型
///
/// ```
/// use kanban_shared::MessageResponse;
///
/// let response = MessageResponse::new("task has been successfully deleted");
/// assert_eq!(response.message, "task has been successfully deleted");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// 削除完了メッセージ（`"<resource> has been successfully deleted"`）を作成する
    pub fn deleted(resource: &str) -> Self {
        Self::new(format!("{resource} has been successfully deleted"))
    }
}
