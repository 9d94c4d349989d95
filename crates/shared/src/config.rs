//! # 環境変数ヘルパー
//!
//! 各サービスの設定読み込みで共通に使う、環境変数の取得と変換を提供する。
//!
//! 読み取りは `lookup` 関数を経由する。本番では `std::env::var` を包んだ関数を渡し、
//! テストでは `HashMap` などから値を返す関数を渡す。

use std::str::FromStr;

use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値の形式が不正
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// プロセスの環境変数を読む `lookup` 関数
pub fn from_process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// 必須の文字列値を取得する
pub fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or(ConfigError::Missing(name))
}

/// 値を取得してパースする（未設定ならデフォルト値）
pub fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

/// 真偽値フラグを取得する（`true`/`1`/`yes` と `false`/`0`/`no` を受け付ける）
pub fn flag_or<F>(lookup: &F, name: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name).as_deref().map(str::to_ascii_lowercase).as_deref() {
        None => Ok(default),
        Some("true" | "1" | "yes") => Ok(true),
        Some("false" | "0" | "no") => Ok(false),
        Some(other) => Err(ConfigError::Invalid {
            name,
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_required_未設定ならmissing() {
        let lookup = lookup_from(&[]);

        assert_eq!(
            required(&lookup, "DATABASE_URL"),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
    }

    #[test]
    fn test_parse_or_未設定ならデフォルト値() {
        let lookup = lookup_from(&[]);

        assert_eq!(parse_or(&lookup, "TRIVIA_PORT", 5000_u16), Ok(5000));
    }

    #[test]
    fn test_parse_or_数値でない値はinvalid() {
        let lookup = lookup_from(&[("TRIVIA_PORT", "abc")]);

        assert_eq!(
            parse_or(&lookup, "TRIVIA_PORT", 5000_u16),
            Err(ConfigError::Invalid {
                name:  "TRIVIA_PORT",
                value: "abc".to_string(),
            })
        );
    }

    #[test]
    fn test_flag_or_大文字小文字を区別しない() {
        let lookup = lookup_from(&[("RUN_MIGRATIONS", "FALSE")]);

        assert_eq!(flag_or(&lookup, "RUN_MIGRATIONS", true), Ok(false));
    }

    #[test]
    fn test_flag_or_不明な値はinvalid() {
        let lookup = lookup_from(&[("RUN_MIGRATIONS", "maybe")]);

        assert!(flag_or(&lookup, "RUN_MIGRATIONS", true).is_err());
    }
}
