//! # Trivia Service サーバー
//!
//! トリビア問題の一覧・検索・作成・削除と、クイズ出題を提供する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TRIVIA_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TRIVIA_PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `RUN_MIGRATIONS` | No | 起動時にマイグレーションを適用するか（デフォルト: `true`） |
//! | `LOG_FORMAT` | No | `json` または `pretty` |
//!
//! ## 起動方法
//!
//! ```bash
//! DATABASE_URL=postgres://localhost/trivia cargo run -p quizcafe-trivia-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use quizcafe_infra::{
    db,
    repository::{PostgresCategoryRepository, PostgresQuestionRepository},
};
use quizcafe_shared::observability::{TracingConfig, init_tracing};
use quizcafe_trivia_service::{app_builder::build_router, config::TriviaConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 本番環境では .env を使わず環境変数を直接設定する
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("trivia-service");
    init_tracing(&tracing_config);
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    let config = TriviaConfig::from_env()?;

    let pool = db::create_pool(&config.database_url).await?;
    if config.run_migrations {
        db::run_migrations(&pool).await?;
        tracing::info!("マイグレーションを適用しました");
    }

    let app = build_router(
        Arc::new(PostgresQuestionRepository::new(pool.clone())),
        Arc::new(PostgresCategoryRepository::new(pool)),
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Trivia Service サーバーを起動します: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
