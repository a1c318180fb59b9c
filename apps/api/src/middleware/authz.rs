//! # 認可ミドルウェア
//!
//! 認証済みの操作主体のロールが、ルートに許可されたロールに含まれるかを検証する。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! let authz_state = AuthzState::new([Role::User]);
//!
//! post(store_category).route_layer(from_fn_with_state(authz_state, require_role))
//! ```
//!
//! [`authenticate`](super::authenticate) の内側に配置すること。

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use kanban_domain::user::Role;

use crate::{auth::AuthenticatedUser, error::ApiError};

/// 認可ミドルウェアの状態
#[derive(Debug, Clone)]
pub struct AuthzState {
    pub allowed_roles: Arc<[Role]>,
}

impl AuthzState {
    pub fn new(allowed_roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed_roles: allowed_roles.into_iter().collect(),
        }
    }
}

/// 認可ミドルウェア
///
/// - 操作主体が無い（認証ミドルウェアを通っていない）場合は 401 Unauthorized
/// - ロールが許可されていない場合は 403 Forbidden
pub async fn require_role(
    State(state): State<AuthzState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(user) = request.extensions().get::<AuthenticatedUser>() else {
        return ApiError::Unauthorized("認証が必要です".to_string()).into_response();
    };

    if !state.allowed_roles.contains(&user.role) {
        tracing::debug!(user_id = %user.id, role = %user.role, "ロールが許可されていない");
        return ApiError::Forbidden("この操作を実行する権限がありません".to_string())
            .into_response();
    }

    next.run(request).await
}
