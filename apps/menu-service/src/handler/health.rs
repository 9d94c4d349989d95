//! # ヘルスチェックハンドラ

use axum::Json;
use quizcafe_shared::HealthResponse;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
