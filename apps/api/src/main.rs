//! # カンバン API サーバー
//!
//! ## 環境変数
//!
//! `.env` ファイルがあれば読み込む。一覧は [`kanban_api::config`] を参照。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p kanban-api
//!
//! # 本番環境（環境変数を直接指定）
//! DATABASE_URL=postgres://... JWT_SECRET=... LOG_FORMAT=json cargo run -p kanban-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use kanban_api::{
    app::{AppDependencies, build_router},
    auth::JwtCodec,
    config::ApiConfig,
    usecase::{CategoryUseCaseImpl, TaskUseCaseImpl},
};
use kanban_domain::clock::{Clock, SystemClock};
use kanban_infra::{
    db,
    repository::{
        CategoryRepository,
        PostgresCategoryRepository,
        PostgresTaskRepository,
        TaskRepository,
    },
};
use kanban_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. データベース接続とマイグレーション
/// 5. ルーターの構築
/// 6. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    init_tracing(&TracingConfig::from_env());
    let _tracing_guard = tracing::info_span!("app", service = "kanban-api").entered();

    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;
    tracing::debug!(?config, "設定を読み込みました");

    let pool = db::create_pool(&config.database_url, config.database_max_connections)
        .await
        .context("データベースへの接続に失敗しました")?;
    db::run_migrations(&pool)
        .await
        .context("マイグレーションの適用に失敗しました")?;
    tracing::info!("マイグレーションを適用しました");

    // 依存関係の初期化
    let category_repository: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let task_repository: Arc<dyn TaskRepository> = Arc::new(PostgresTaskRepository::new(pool));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let app = build_router(AppDependencies {
        categories: Arc::new(CategoryUseCaseImpl::new(
            category_repository.clone(),
            clock.clone(),
        )),
        tasks:      Arc::new(TaskUseCaseImpl::new(
            task_repository,
            category_repository,
            clock,
        )),
        jwt:        Arc::new(JwtCodec::new(&config.jwt_secret)),
    });

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("バインドアドレスが不正です")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
