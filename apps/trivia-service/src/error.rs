//! # Trivia Service エラー定義
//!
//! Trivia Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ストア（DB）のエラーはクライアントには 400 として返し、原因はログにのみ残す。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quizcafe_domain::DomainError;
use quizcafe_infra::InfraError;
use quizcafe_shared::ErrorResponse;
use thiserror::Error;

/// Trivia Service で発生するエラー
#[derive(Debug, Error)]
pub enum TriviaError {
    /// 不正なリクエスト
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 形式は正しいが処理できないリクエスト
    #[error("処理できないリクエスト: {0}")]
    Unprocessable(String),

    /// ルートは存在するがメソッドが許可されていない
    #[error("許可されていないメソッドです")]
    MethodNotAllowed,

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for TriviaError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::BadRequest(msg),
            err @ DomainError::NotFound { .. } => Self::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> Response {
        let body = match &self {
            TriviaError::BadRequest(msg) => {
                tracing::debug!("不正なリクエスト: {}", msg);
                ErrorResponse::bad_request()
            }
            TriviaError::NotFound(msg) => {
                tracing::debug!("リソースが見つかりません: {}", msg);
                ErrorResponse::not_found()
            }
            TriviaError::Unprocessable(msg) => {
                tracing::debug!("処理できないリクエスト: {}", msg);
                ErrorResponse::unprocessable()
            }
            TriviaError::MethodNotAllowed => ErrorResponse::method_not_allowed(),
            TriviaError::Database(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "データベースエラー"
                );
                ErrorResponse::bad_request()
            }
        };

        let status =
            StatusCode::from_u16(body.error).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}
