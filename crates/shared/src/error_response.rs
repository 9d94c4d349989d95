//! # エラーレスポンス
//!
//! 両サービスで共通のエラーエンベロープ `{success: false, error, message}` を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は各サービスの責務（shared に axum 依存を入れない）
//! - `error` には HTTP ステータスコードをそのまま入れる
//! - 認証エラーのように独自のメッセージを返す場合は `new()` を使う

use serde::{Deserialize, Serialize};

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error:   u16,
    pub message: String,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error:   status,
            message: message.into(),
        }
    }

    /// 400 Bad Request
    pub fn bad_request() -> Self {
        Self::new(400, "bad request")
    }

    /// 404 Not Found
    pub fn not_found() -> Self {
        Self::new(404, "resource not found")
    }

    /// 405 Method Not Allowed
    pub fn method_not_allowed() -> Self {
        Self::new(405, "method not allowed")
    }

    /// 422 Unprocessable Entity
    pub fn unprocessable() -> Self {
        Self::new(422, "unprocessable")
    }

    /// 500 Internal Server Error
    ///
    /// メッセージは固定値（内部情報を漏らさないため）。
    pub fn internal_error() -> Self {
        Self::new(500, "internal server error")
    }
}
