//! # 認証ミドルウェア
//!
//! `Authorization: Bearer <JWT>` ヘッダを検証し、
//! [`AuthenticatedUser`](crate::auth::AuthenticatedUser) をリクエスト extensions に格納する。
//! ヘッダが無い、または検証に失敗した場合は 401 Unauthorized を返す。

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{auth::JwtCodec, error::ApiError};

pub async fn authenticate(
    State(codec): State<Arc<JwtCodec>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(&request) else {
        return ApiError::Unauthorized("認証が必要です".to_string()).into_response();
    };

    let user = match codec.decode(token) {
        Ok(user) => user,
        Err(e) => return e.into_response(),
    };

    tracing::debug!(user_id = %user.id, role = %user.role, "認証に成功");
    request.extensions_mut().insert(user);
    next.run(request).await
}

/// スキーム名は大文字小文字を区別しない（RFC 9110）
fn bearer_token(request: &Request<Body>) -> Option<&str> {
    let value = request.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(token.trim()).filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use axum::{
        Extension,
        Router,
        http::StatusCode,
        middleware::from_fn_with_state,
        routing::get,
    };
    use chrono::Duration;
    use kanban_domain::user::{Role, UserId};
    use rstest::rstest;
    use tower::ServiceExt;

    use super::*;
    use crate::auth::AuthenticatedUser;

    async fn echo_user_id(Extension(user): Extension<AuthenticatedUser>) -> String {
        user.id.to_string()
    }

    fn create_test_app(codec: Arc<JwtCodec>) -> Router {
        Router::new()
            .route("/protected", get(echo_user_id))
            .layer(from_fn_with_state(codec, authenticate))
    }

    fn request(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/protected");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_有効なトークンで操作主体がハンドラに渡る() {
        // Given
        let codec = Arc::new(JwtCodec::new("secret"));
        let user = AuthenticatedUser::new(UserId::new(42), "user@example.com", Role::User);
        let token = codec.encode(&user, Duration::hours(1)).unwrap();
        let sut = create_test_app(codec);

        // When
        let response = sut
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"42");
    }

    #[tokio::test]
    async fn test_authorizationヘッダが無い場合は401を返す() {
        let sut = create_test_app(Arc::new(JwtCodec::new("secret")));

        let response = sut.oneshot(request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_bearer以外のスキームは401を返す() {
        let sut = create_test_app(Arc::new(JwtCodec::new("secret")));

        let response = sut
            .oneshot(request(Some("Basic dXNlcjpwYXNz")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_署名が不正なトークンは401を返す() {
        let other = JwtCodec::new("other");
        let user = AuthenticatedUser::new(UserId::new(42), "user@example.com", Role::User);
        let token = other.encode(&user, Duration::hours(1)).unwrap();
        let sut = create_test_app(Arc::new(JwtCodec::new("secret")));

        let response = sut
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[case::小文字("bearer")]
    #[case::大文字("BEARER")]
    #[tokio::test]
    async fn test_スキーム名の大文字小文字は区別しない(#[case] scheme: &str) {
        // Given
        let codec = Arc::new(JwtCodec::new("secret"));
        let user = AuthenticatedUser::new(UserId::new(42), "user@example.com", Role::User);
        let token = codec.encode(&user, Duration::hours(1)).unwrap();
        let sut = create_test_app(codec);

        // When
        let response = sut
            .oneshot(request(Some(&format!("{scheme} {token}"))))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
    }
}
