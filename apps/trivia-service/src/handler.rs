//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - 抽出器の失敗（不正なクエリ・JSON・パス）は `Result<_, Rejection>` で受け、
//!   ハンドラ側で [`TriviaError`] に変換する

pub mod category;
pub mod health;
pub mod question;
pub mod quiz;

pub use category::{list_categories, questions_in_category};
pub use health::health_check;
pub use question::{QuestionState, create_or_search_question, delete_question, list_questions};
pub use quiz::{QuizState, pick_quiz_question};
use serde::Deserialize;

use crate::error::TriviaError;

/// 未登録ルートのフォールバック
pub async fn not_found_fallback() -> TriviaError {
    TriviaError::NotFound("ルートが存在しません".to_string())
}

/// 登録済みルートで未対応メソッドが呼ばれた場合のフォールバック
pub async fn method_not_allowed_fallback() -> TriviaError {
    TriviaError::MethodNotAllowed
}

/// JSON 数値と数字文字列の両方を受け付ける整数
///
/// フロントエンドのフォームはカテゴリ ID を文字列で送ることがあるため。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LenientInt {
    Number(i64),
    Text(String),
}

impl LenientInt {
    /// `i32` に変換する（範囲外・数字でない文字列は `None`）
    pub fn to_i32(&self) -> Option<i32> {
        match self {
            Self::Number(n) => i32::try_from(*n).ok(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}
