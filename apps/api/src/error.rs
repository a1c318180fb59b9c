//! # API エラー定義
//!
//! API サーバーで発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! レスポンスボディは常に `{ "message": "..." }` 形式。
//!
//! | ApiError | HTTP Status |
//! |----------|-------------|
//! | Validation | 400 |
//! | Unauthorized | 401 |
//! | Forbidden | 403 |
//! | NotFound | 404 |
//! | Database / Internal | 500 |
//!
//! インフラ層の外部キー制約違反は、参照先のカテゴリが無いものとして 404 にする。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use kanban_domain::DomainError;
use kanban_infra::InfraError;
use kanban_shared::MessageResponse;
use thiserror::Error;

/// API サーバーで発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 入力値の不備（バインド失敗・必須項目の欠落・値オブジェクトの検証失敗）
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// アクセストークンが無い、または検証できない
    #[error("認証エラー: {0}")]
    Unauthorized(String),

    /// ロールが許可されていない、または所有者ではない
    #[error("権限がありません: {0}")]
    Forbidden(String),

    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(InfraError),

    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::NotFound { entity_type, id } => {
                Self::NotFound(format!("{entity_type} が見つかりません: {id}"))
            }
            DomainError::Forbidden(msg) => Self::Forbidden(msg),
        }
    }
}

impl From<InfraError> for ApiError {
    fn from(err: InfraError) -> Self {
        if err.is_missing_reference() {
            tracing::debug!(error = %err, "参照先のカテゴリが存在しない");
            return Self::NotFound("カテゴリが見つかりません".to_string());
        }
        Self::Database(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Database(e) => {
                tracing::error!(
                    error.kind = "database",
                    span_trace = %e.span_trace(),
                    "データベースエラー: {}",
                    e
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "内部エラーが発生しました".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(error.kind = "internal", "内部エラー: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "内部エラーが発生しました".to_string(),
                )
            }
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}
