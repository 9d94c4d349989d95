//! # Menu Service エラー定義
//!
//! Menu Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//! 認証・認可のエラーは [`AuthError`](crate::auth::AuthError) が別途扱う。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quizcafe_domain::DomainError;
use quizcafe_infra::InfraError;
use quizcafe_shared::ErrorResponse;
use thiserror::Error;

/// Menu Service で発生するエラー
#[derive(Debug, Error)]
pub enum MenuError {
    /// 不正なリクエスト
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// ルートは存在するがメソッドが許可されていない
    #[error("許可されていないメソッドです")]
    MethodNotAllowed,

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for MenuError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::BadRequest(msg),
            err @ DomainError::NotFound { .. } => Self::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for MenuError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            MenuError::BadRequest(msg) => {
                tracing::debug!("不正なリクエスト: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request())
            }
            MenuError::NotFound(msg) => {
                tracing::debug!("リソースが見つかりません: {}", msg);
                (StatusCode::NOT_FOUND, ErrorResponse::not_found())
            }
            MenuError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorResponse::method_not_allowed(),
            ),
            MenuError::Database(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "データベースエラー"
                );
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request())
            }
        };

        (status, Json(body)).into_response()
    }
}
