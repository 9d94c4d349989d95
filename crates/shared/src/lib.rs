//! # QuizCafe 共有ユーティリティ
//!
//! トリビアサービスとメニューサービスの両方で使う共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換は各サービスの責務）
//! - トレーシング関連の依存は `observability` feature に閉じ込める

pub mod config;
pub mod error_response;
pub mod health;
pub mod observability;

pub use config::ConfigError;
pub use error_response::ErrorResponse;
pub use health::HealthResponse;
