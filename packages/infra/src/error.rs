//! # インフラ層エラー定義
//!
//! リポジトリ呼び出しの失敗を、API 層が扱い分ける単位で表現する。
//!
//! | 種別 | 発生条件 | API での扱い |
//! |------|----------|--------------|
//! | [`MissingReference`](InfraErrorKind::MissingReference) | 外部キー制約違反（参照先のカテゴリが同時に削除された等） | 404 |
//! | [`Database`](InfraErrorKind::Database) | 接続断・SQL エラーなど上記以外 | 500 |
//! | [`Unexpected`](InfraErrorKind::Unexpected) | DB の値がドメインの不変条件を満たさない | 500 |
//!
//! 生成時に [`SpanTrace`] を捕捉するので、500 のログにはどのハンドラ・リポジトリを
//! 経由したかが残る（`ErrorLayer` 登録時）。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// リポジトリ呼び出しのエラー
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// エラー種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// 参照先の行が存在しない
    #[error("参照先が存在しません（制約: {constraint}）")]
    MissingReference { constraint: String },

    #[error("データベースエラー: {0}")]
    Database(#[source] sqlx::Error),

    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl InfraError {
    fn new(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }

    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 外部キー制約 `constraint` の違反
    pub fn missing_reference(constraint: impl Into<String>) -> Self {
        Self::new(InfraErrorKind::MissingReference {
            constraint: constraint.into(),
        })
    }

    /// 行からエンティティへの変換失敗など
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::new(InfraErrorKind::Unexpected(msg.into()))
    }

    /// 参照先が存在しないことによる失敗か
    pub fn is_missing_reference(&self) -> bool {
        matches!(self.kind, InfraErrorKind::MissingReference { .. })
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

impl From<sqlx::Error> for InfraError {
    fn from(source: sqlx::Error) -> Self {
        match source {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                Self::missing_reference(db.constraint().unwrap_or("unknown"))
            }
            other => Self::new(InfraErrorKind::Database(other)),
        }
    }
}
