//! # リポジトリ
//!
//! 永続化のインターフェース（トレイト）と PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **トレイト経由のアクセス**: ハンドラは `Arc<dyn XxxRepository>` のみに依存する
//! - **テスタビリティ**: `test-utils` feature のモック実装に差し替え可能
//! - **安定した順序**: 一覧系のクエリはすべて `id` 昇順で返す
//!
//! ## エラー条件
//!
//! すべてのメソッドは [`InfraError`](crate::InfraError) を返しうる:
//! - 接続不能・SQL 実行失敗: `InfraErrorKind::Database`
//! - 外部キー・一意制約違反: `InfraError::constraint()` が制約名を返す
//! - レシピのテキスト変換失敗: `InfraErrorKind::Serialization`

pub mod category_repository;
pub mod drink_repository;
pub mod question_repository;

pub use category_repository::{CategoryRepository, PostgresCategoryRepository};
pub use drink_repository::{DrinkRepository, PostgresDrinkRepository};
pub use question_repository::{PostgresQuestionRepository, QuestionRepository};
