//! # Menu Service サーバー
//!
//! コーヒーショップのドリンクメニューを提供する。
//! 一覧（short 表現）以外の操作は、外部の認可サーバーが発行した
//! Bearer トークンの `permissions` クレームで保護する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `MENU_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `MENU_PORT` | No | ポート番号（デフォルト: `5001`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `RUN_MIGRATIONS` | No | 起動時にマイグレーションを適用するか（デフォルト: `true`） |
//! | `AUTH_JWT_PUBLIC_KEY` | ※ | RS256 検証用の公開鍵（PEM） |
//! | `AUTH_JWT_SECRET` | ※ | HS256 検証用の共有シークレット |
//! | `AUTH_AUDIENCE` | No | 検証する `aud` |
//! | `AUTH_ISSUER` | No | 検証する `iss` |
//!
//! ※ `AUTH_JWT_PUBLIC_KEY` と `AUTH_JWT_SECRET` のどちらかが必須。

use std::{net::SocketAddr, sync::Arc};

use quizcafe_infra::{db, repository::PostgresDrinkRepository};
use quizcafe_menu_service::{
    app_builder::build_router,
    auth::JwtClaimsVerifier,
    config::MenuConfig,
};
use quizcafe_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 本番環境では .env を使わず環境変数を直接設定する
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("menu-service");
    init_tracing(&tracing_config);
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    let config = MenuConfig::from_env()?;

    let verifier = JwtClaimsVerifier::new(
        &config.auth.key,
        config.auth.audience.as_deref(),
        config.auth.issuer.as_deref(),
    )?;

    let pool = db::create_pool(&config.database_url).await?;
    if config.run_migrations {
        db::run_migrations(&pool).await?;
        tracing::info!("マイグレーションを適用しました");
    }

    let app = build_router(
        Arc::new(PostgresDrinkRepository::new(pool)),
        Arc::new(verifier),
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Menu Service サーバーを起動します: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
