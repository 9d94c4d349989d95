//! # QuizCafe インフラ層
//!
//! PostgreSQL との接続とリポジトリの具体実装を担当する。
//!
//! ## 設計方針
//!
//! このクレートはリポジトリトレイトとその sqlx 実装を提供する。
//! ハンドラ・ユースケースはトレイト経由でのみ永続化に触れるため、
//! テストでは [`mock`] のインメモリ実装に差し替えられる。
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プールとマイグレーション
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと PostgreSQL 実装
//! - `mock` - インメモリのモックリポジトリ（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use quizcafe_infra::{db, repository::PostgresQuestionRepository};
//!
//! let pool = db::create_pool("postgres://localhost/trivia").await?;
//! db::run_migrations(&pool).await?;
//! let questions = PostgresQuestionRepository::new(pool.clone());
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
