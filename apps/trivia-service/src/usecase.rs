//! # ユースケース
//!
//! ハンドラから呼ばれるアプリケーションロジックを定義する。
//! リポジトリはトレイトオブジェクトで受け取り、テストではモックに差し替える。

pub mod question;
pub mod quiz;

pub use question::{QuestionListing, QuestionUseCaseImpl};
pub use quiz::QuizUseCaseImpl;
