//! # Menu Service 設定
//!
//! 環境変数から Menu Service サーバーの設定を読み込む。

use quizcafe_shared::config::{self, ConfigError};

use crate::auth::JwtKey;

/// Menu Service サーバーの設定
#[derive(Debug, Clone)]
pub struct MenuConfig {
    /// バインドアドレス
    pub host:           String,
    /// ポート番号
    pub port:           u16,
    /// データベース接続 URL
    pub database_url:   String,
    /// 起動時にマイグレーションを適用するか
    pub run_migrations: bool,
    pub auth:           AuthConfig,
}

/// トークン検証の設定
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub key:      JwtKey,
    /// 未設定の場合 `aud` は検証しない
    pub audience: Option<String>,
    /// 未設定の場合 `iss` は検証しない
    pub issuer:   Option<String>,
}

impl MenuConfig {
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
            host:           lookup("MENU_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port:           config::parse_or(lookup, "MENU_PORT", 5001)?,
            database_url:   config::required(lookup, "DATABASE_URL")?,
            run_migrations: config::flag_or(lookup, "RUN_MIGRATIONS", true)?,
            auth:           AuthConfig::from_lookup(lookup)?,
        })
    }
}

impl AuthConfig {
    /// 公開鍵（RS256）を優先し、なければ共有シークレット（HS256）を使う
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = match (lookup("AUTH_JWT_PUBLIC_KEY"), lookup("AUTH_JWT_SECRET")) {
            // 環境変数では改行を `\n` と書くことが多い
            (Some(pem), _) => JwtKey::RsaPublicPem(pem.replace("\\n", "\n")),
            (None, Some(secret)) => JwtKey::Secret(secret),
            (None, None) => return Err(ConfigError::Missing("AUTH_JWT_PUBLIC_KEY or AUTH_JWT_SECRET")),
        };

        Ok(Self {
            key,
            audience: lookup("AUTH_AUDIENCE"),
            issuer: lookup("AUTH_ISSUER"),
        })
    }
}
