//! # ヘルスチェックハンドラ
//!
//! ```text
//! GET /health
//! ```
//!
//! 認証不要。データベースへの接続は確認せず、プロセスの稼働のみを返す。

use axum::Json;
use kanban_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// 常に 200 OK と `{"status":"healthy","version":"<Cargo.toml の version>"}` を返す。
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
