//! # Trivia Service アプリケーション構築
//!
//! リポジトリ → ユースケース → State → Router の順に組み立てる。
//! `main.rs` はインフラ初期化とサーバー起動に集中し、
//! ルーターテストはモックリポジトリを渡してこの関数を直接使う。

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};
use quizcafe_infra::repository::{CategoryRepository, QuestionRepository};
use quizcafe_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        QuestionState,
        QuizState,
        create_or_search_question,
        delete_question,
        health_check,
        list_categories,
        list_questions,
        method_not_allowed_fallback,
        not_found_fallback,
        pick_quiz_question,
        questions_in_category,
    },
    usecase::{QuestionUseCaseImpl, QuizUseCaseImpl},
};

/// ルーターを構築する
pub fn build_router(
    question_repository: Arc<dyn QuestionRepository>,
    category_repository: Arc<dyn CategoryRepository>,
) -> Router {
    let question_state = Arc::new(QuestionState {
        usecase: QuestionUseCaseImpl::new(question_repository.clone(), category_repository),
    });
    let quiz_state = Arc::new(QuizState {
        usecase: QuizUseCaseImpl::new(question_repository),
    });

    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/categories", get(list_categories))
                .route("/categories/{id}/questions", get(questions_in_category))
                .route(
                    "/questions",
                    get(list_questions).post(create_or_search_question),
                )
                .route("/questions/{id}", delete(delete_question))
                .with_state(question_state),
        )
        .merge(
            Router::new()
                .route("/quizzes", post(pick_quiz_question))
                .with_state(quiz_state),
        )
        .fallback(not_found_fallback)
        .method_not_allowed_fallback(method_not_allowed_fallback)
        // 下に書いたものが外側: Request ID を採番 → スパン作成 → レスポンスへ伝播
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
