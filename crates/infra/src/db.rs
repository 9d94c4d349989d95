//! # PostgreSQL データベース接続管理
//!
//! 接続プールの作成とマイグレーションの適用を行う。
//!
//! 接続プールはアプリケーション起動時に一度だけ作成し、
//! 各リポジトリに `PgPool` のクローン（内部で `Arc` 共有）として渡す。

use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};

/// データベースマイグレーションを実行する
///
/// `migrations/` 配下の SQL ファイルを順番に適用する。
/// 適用済みのマイグレーションはスキップされる。
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// PostgreSQL 接続プールを作成する
///
/// # 設定値
///
/// - `max_connections(10)`: 最大接続数
/// - `acquire_timeout(5秒)`: 接続取得のタイムアウト。超過時はエラー
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}
