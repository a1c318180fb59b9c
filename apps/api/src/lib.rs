//! # カンバン API サーバー
//!
//! カテゴリ（列）とタスク（カード）を管理する JSON API。
//!
//! ## レイヤー構成
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │ middleware: authenticate → require_role    │
//! ├────────────────────────────────────────────┤
//! │ extract: ValidatedJson / IdPath（400）      │
//! ├────────────────────────────────────────────┤
//! │ handler: 所有者確認・上書き・レスポンス整形 │
//! ├────────────────────────────────────────────┤
//! │ usecase: 存在確認・更新日時の記録           │
//! ├────────────────────────────────────────────┤
//! │ kanban_infra: PostgreSQL リポジトリ         │
//! └────────────────────────────────────────────┘
//! ```
//!
//! ## モジュール構成
//!
//! - [`app`] - ルーター構築
//! - [`auth`] - アクセストークン（JWT）と操作主体
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`extract`] - 入力検証付きの extractor
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`middleware`] - 認証・認可ミドルウェア
//! - [`usecase`] - ユースケース

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod middleware;
pub mod usecase;
