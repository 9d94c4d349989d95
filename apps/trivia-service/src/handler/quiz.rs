//! # クイズハンドラ
//!
//! `POST /quizzes` で、出題済みの問題を除いた次の 1 問を返す。
//!
//! ```json
//! {
//!   "previous_questions": [4, 9],
//!   "quiz_category": { "id": 0, "type": "Science" }
//! }
//! ```
//!
//! キーの欠落や型の不一致は 422、JSON として読めないボディは 400。

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use quizcafe_domain::{
    question::{Question, QuestionId},
    quiz::QuizScope,
};
use serde::{Deserialize, Serialize};

use crate::{error::TriviaError, handler::LenientInt, usecase::QuizUseCaseImpl};

/// クイズ API の共有状態
pub struct QuizState {
    pub usecase: QuizUseCaseImpl,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<QuestionId>,
    pub quiz_category:      QuizCategory,
}

/// クライアントのカテゴリ選択（`id` は 0 始まりの選択肢インデックス）
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id:            LenientInt,
    #[serde(rename = "type")]
    pub category_type: String,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub question: Option<Question>,
}

fn reject(rejection: JsonRejection) -> TriviaError {
    match rejection {
        JsonRejection::JsonDataError(e) => TriviaError::Unprocessable(e.body_text()),
        other => TriviaError::BadRequest(other.body_text()),
    }
}

/// POST /quizzes
pub async fn pick_quiz_question(
    State(state): State<Arc<QuizState>>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, TriviaError> {
    let Json(request) = body.map_err(reject)?;

    let selector = request.quiz_category.id.to_i32().ok_or_else(|| {
        TriviaError::Unprocessable("quiz_category.id は整数です".to_string())
    })?;
    let scope = QuizScope::from_selector(selector, &request.quiz_category.category_type);

    let question = state
        .usecase
        .next_question(scope, &request.previous_questions)
        .await?;
    Ok(Json(QuizResponse { question }))
}
