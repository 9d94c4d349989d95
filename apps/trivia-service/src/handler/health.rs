//! # ヘルスチェックハンドラ
//!
//! ```text
//! GET /health
//! ```
//!
//! ```json
//! { "status": "healthy", "version": "0.1.0" }
//! ```

use axum::Json;
use quizcafe_shared::HealthResponse;

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
