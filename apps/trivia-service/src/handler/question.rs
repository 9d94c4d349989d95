//! # 問題ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /questions?page=N` - 問題のページ表示
//! - `POST /questions` - 問題の作成、または `searchTerm` による検索
//! - `DELETE /questions/{id}` - 問題の削除

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    Json,
    extract::{
        Path,
        Query,
        State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use quizcafe_domain::{
    category::{Category, CategoryId},
    question::{NewQuestion, Page, Question, QuestionId},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::TriviaError,
    handler::LenientInt,
    usecase::{QuestionListing, QuestionUseCaseImpl},
};

/// 問題・カテゴリ API の共有状態
pub struct QuestionState {
    pub usecase: QuestionUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// 問題作成リクエスト
///
/// 欠落の判定はドメイン層で行うため、全項目を `Option` で受ける。
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question:   Option<String>,
    pub answer:     Option<String>,
    pub category:   Option<LenientInt>,
    pub difficulty: Option<LenientInt>,
}

/// 一覧系 API のレスポンス
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub questions:        Vec<Question>,
    pub total_questions:  i64,
    /// `{"<id>": "<type>"}` 形式のカテゴリ表
    pub categories:       BTreeMap<CategoryId, String>,
    pub current_category: Option<String>,
}

impl From<QuestionListing> for QuestionListResponse {
    fn from(listing: QuestionListing) -> Self {
        Self {
            questions:        listing.questions,
            total_questions:  listing.total_questions,
            categories:       category_map(&listing.categories),
            current_category: listing
                .current_category
                .map(|c| c.category_type().to_string()),
        }
    }
}

pub(crate) fn category_map(categories: &[Category]) -> BTreeMap<CategoryId, String> {
    categories
        .iter()
        .map(|c| (c.id(), c.category_type().to_string()))
        .collect()
}

#[derive(Debug, Serialize)]
pub struct CreatedQuestionResponse {
    pub success:     bool,
    pub question_id: QuestionId,
}

#[derive(Debug, Serialize)]
pub struct DeletedQuestionResponse {
    pub success: bool,
    pub deleted: QuestionId,
}

// --- ハンドラ ---

/// GET /questions?page=N
///
/// `page` は 1 以上の整数で必須。
pub async fn list_questions(
    State(state): State<Arc<QuestionState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionListResponse>, TriviaError> {
    let Query(query) = query.map_err(|e| TriviaError::BadRequest(e.body_text()))?;
    let raw = query
        .page
        .ok_or_else(|| TriviaError::BadRequest("page は必須です".to_string()))?;
    let page = Page::parse(&raw)?;

    let listing = state.usecase.list_page(page).await?;
    Ok(Json(listing.into()))
}

/// POST /questions
///
/// ボディに `searchTerm` があれば（空文字列でも）検索、なければ作成として扱う。
/// `searchTerm: null` は指定なしとみなす。
pub async fn create_or_search_question(
    State(state): State<Arc<QuestionState>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<axum::response::Response, TriviaError> {
    let Json(body) = body.map_err(|e| TriviaError::BadRequest(e.body_text()))?;

    if let Some(term) = body.get("searchTerm").filter(|v| !v.is_null()) {
        let term = term
            .as_str()
            .ok_or_else(|| TriviaError::BadRequest("searchTerm は文字列です".to_string()))?;
        let listing = state.usecase.search(term).await?;
        return Ok(Json(QuestionListResponse::from(listing)).into_response());
    }

    let request: CreateQuestionRequest =
        serde_json::from_value(body).map_err(|e| TriviaError::BadRequest(e.to_string()))?;
    let new_question = NewQuestion::from_parts(
        request.question,
        request.answer,
        int_field(request.category, "category")?.map(CategoryId::new),
        int_field(request.difficulty, "difficulty")?,
    )?;

    let created = state.usecase.create(new_question).await?;
    Ok(Json(CreatedQuestionResponse {
        success:     true,
        question_id: created.id(),
    })
    .into_response())
}

fn int_field(value: Option<LenientInt>, name: &str) -> Result<Option<i32>, TriviaError> {
    value
        .map(|v| {
            v.to_i32()
                .ok_or_else(|| TriviaError::BadRequest(format!("{name} は整数です")))
        })
        .transpose()
}

/// DELETE /questions/{id}
///
/// 整数でない ID は存在しない問題として扱う。
pub async fn delete_question(
    State(state): State<Arc<QuestionState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeletedQuestionResponse>, TriviaError> {
    let Path(id) = id.map_err(|e| TriviaError::NotFound(e.body_text()))?;
    let id = QuestionId::new(id);

    state.usecase.delete(id).await?;
    Ok(Json(DeletedQuestionResponse {
        success: true,
        deleted: id,
    }))
}
