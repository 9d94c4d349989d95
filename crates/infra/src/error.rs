//! # インフラ層エラー定義
//!
//! データベースとの通信やレシピの変換で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（Database, Serialization 等）
//!
//! `From` 実装や convenience constructor でエラーを生成した時点の
//! スパン情報（呼び出し経路）が自動的に記録される。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別に応じた処理には [`kind()`](InfraError::kind) を使用する:
///
/// ```ignore
/// match error.kind() {
///     InfraErrorKind::ConstraintViolation(name) => { /* 制約違反 */ }
///     _ => { /* その他 */ }
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// データベースエラー
    ///
    /// 接続失敗、SQL の実行失敗、制約違反など。
    #[error("データベースエラー: {0}")]
    Database(#[source] sqlx::Error),

    /// シリアライズ/デシリアライズエラー
    ///
    /// レシピのテキスト表現との変換に失敗した場合に使用する。
    #[error("シリアライズエラー: {0}")]
    Serialization(#[source] serde_json::Error),

    /// 制約違反（インメモリ実装用）
    ///
    /// PostgreSQL の制約違反は `Database` として表現される。
    /// どちらの場合も [`InfraError::constraint`] で制約名を取得できる。
    #[error("制約違反: {0}")]
    ConstraintViolation(String),
}

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 違反した制約名を返す（制約違反でない場合は `None`）
    pub fn constraint(&self) -> Option<&str> {
        match &self.kind {
            InfraErrorKind::Database(e) => e.as_database_error().and_then(|d| d.constraint()),
            InfraErrorKind::ConstraintViolation(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// 制約違反エラーを生成する
    pub fn constraint_violation(name: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::ConstraintViolation(name.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

impl From<sqlx::Error> for InfraError {
    fn from(source: sqlx::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Database(source),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(source: serde_json::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Serialization(source),
            span_trace: SpanTrace::capture(),
        }
    }
}
