//! # Trivia Service 設定
//!
//! 環境変数から Trivia Service サーバーの設定を読み込む。

use quizcafe_shared::config::{self, ConfigError};

/// Trivia Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaConfig {
    /// バインドアドレス
    pub host:           String,
    /// ポート番号
    pub port:           u16,
    /// データベース接続 URL
    pub database_url:   String,
    /// 起動時にマイグレーションを適用するか
    pub run_migrations: bool,
}

impl TriviaConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&config::from_process_env)
    }

    /// 任意の取得関数から設定を読み込む
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host:           lookup("TRIVIA_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port:           config::parse_or(lookup, "TRIVIA_PORT", 5000)?,
            database_url:   config::required(lookup, "DATABASE_URL")?,
            run_migrations: config::flag_or(lookup, "RUN_MIGRATIONS", true)?,
        })
    }
}
