//! # アクセストークン
//!
//! `Authorization: Bearer <JWT>` で受け取るアクセストークンの検証と、
//! 検証済みの操作主体 [`AuthenticatedUser`] を定義する。
//!
//! トークンの発行フロー（ログイン）はこのサーバーの責務外。
//! [`JwtCodec::encode`] はテストと開発用ツールのためにある。
//!
//! ## クレーム
//!
//! ```json
//! { "id": 42, "email": "user@example.com", "role": "user", "iat": 1700000000, "exp": 1700003600 }
//! ```

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kanban_domain::user::{Role, UserId};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// 認証済みの操作主体
///
/// 認証ミドルウェアがリクエスト extensions に格納し、
/// ハンドラは `Extension<AuthenticatedUser>` で受け取る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id:    UserId,
    pub email: String,
    pub role:  Role,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            role,
        }
    }
}

/// JWT クレーム
///
/// `role` は文字列のまま受け取り、未知の値でも認証は失敗させない。
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id:    i64,
    pub email: String,
    pub role:  String,
    pub iat:   i64,
    pub exp:   i64,
}

/// HS256 共有鍵によるトークンの署名・検証
pub struct JwtCodec {
    encoding:   EncodingKey,
    decoding:   DecodingKey,
    validation: Validation,
}

impl JwtCodec {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding:   EncodingKey::from_secret(secret.as_bytes()),
            decoding:   DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }

    /// 操作主体のトークンを発行する
    ///
    /// # Errors
    ///
    /// 署名に失敗した場合は `ApiError::Internal` を返す。
    pub fn encode(&self, user: &AuthenticatedUser, ttl: Duration) -> Result<String, ApiError> {
        let now = Utc::now();
        let claims = Claims {
            id:    user.id.as_i64(),
            email: user.email.clone(),
            role:  user.role.to_string(),
            iat:   now.timestamp(),
            exp:   (now + ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| ApiError::Internal(format!("トークンの署名に失敗: {e}")))
    }

    /// トークンを検証し、操作主体を復元する
    ///
    /// # Errors
    ///
    /// 署名不一致・期限切れ・クレーム不足の場合は `ApiError::Unauthorized` を返す。
    pub fn decode(&self, token: &str) -> Result<AuthenticatedUser, ApiError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "トークンの検証に失敗");
            ApiError::Unauthorized("アクセストークンが不正です".to_string())
        })?;
        let claims = data.claims;
        Ok(AuthenticatedUser::new(
            UserId::new(claims.id),
            claims.email,
            Role::from_claim(&claims.role),
        ))
    }
}
