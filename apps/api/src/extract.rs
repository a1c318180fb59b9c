//! # リクエスト抽出
//!
//! バインドと入力検証をハンドラの手前で済ませる extractor。
//! 失敗はすべて 400 Bad Request（`ApiError::Validation`）になり、
//! ユースケース層には到達しない。
//!
//! - [`ValidatedJson`]: JSON ボディのデシリアライズ + `validator` による必須項目チェック
//! - [`IdPath`]: パスパラメータ `{id}` の数値変換

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use itertools::Itertools;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// 検証済み JSON ボディ
///
/// 必須文字列は `#[serde(default)]` で空文字列として、必須 ID は `0` としてバインドし、
/// `#[validate(...)]` の規則で拒否する。
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::Validation(validation_message(&errors)))?;

        Ok(Self(value))
    }
}

/// 検証エラーを 1 行のメッセージにまとめる
///
/// フィールド名順に並べるため、同じ入力には常に同じメッセージを返す。
fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map_or_else(|| format!("{field} が不正です"), ToString::to_string)
            })
        })
        .join(", ")
}

/// パスパラメータの数値 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode},
        routing::{get, post},
    };
    use kanban_shared::MessageResponse;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use tower::ServiceExt;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[serde(default)]
        #[validate(length(min = 1, message = "title は必須です"))]
        title:       String,
        #[serde(default)]
        #[validate(range(min = 1, message = "category_id は必須です"))]
        category_id: i64,
    }

    async fn accept(ValidatedJson(payload): ValidatedJson<Payload>) -> String {
        format!("{}:{}", payload.title, payload.category_id)
    }

    async fn echo_id(IdPath(id): IdPath) -> String {
        id.to_string()
    }

    fn create_test_app() -> Router {
        Router::new()
            .route("/payload", post(accept))
            .route("/items/{id}", get(echo_id))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/payload")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn message_of(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice::<MessageResponse>(&bytes)
            .unwrap()
            .message
    }

    #[tokio::test]
    async fn test_必須項目が揃っていればハンドラに渡る() {
        let response = create_test_app()
            .oneshot(post_json(r#"{"title":"Fix bug","category_id":1}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_欠落した項目はすべてフィールド名順にメッセージへ含まれる() {
        let response = create_test_app().oneshot(post_json("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            message_of(response).await,
            "category_id は必須です, title は必須です"
        );
    }

    #[tokio::test]
    async fn test_不正なjsonは400を返す() {
        let response = create_test_app()
            .oneshot(post_json("{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_数値でないパスidは400を返す() {
        let request = Request::builder()
            .uri("/items/abc")
            .body(Body::empty())
            .unwrap();

        let response = create_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_数値のパスidはそのまま渡る() {
        let request = Request::builder()
            .uri("/items/7")
            .body(Body::empty())
            .unwrap();

        let response = create_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
