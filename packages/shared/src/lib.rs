//! # Kanban 共有ユーティリティ
//!
//! API サーバーとインフラ層の双方から使われる、ビジネスロジックを含まない型を提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, api）から依存される
//! - レスポンスの外形（エンベロープ）とログ初期化のみを置く
//! - 外部クレートへの依存は最小限に抑える

pub mod api_response;
pub mod health;
pub mod message_response;
pub mod observability;

pub use api_response::ApiResponse;
pub use health::HealthResponse;
pub use message_response::MessageResponse;
