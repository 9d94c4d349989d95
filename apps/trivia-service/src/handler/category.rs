//! # カテゴリハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /categories` - カテゴリ名の一覧（ID 順）
//! - `GET /categories/{id}/questions` - カテゴリに属する問題の一覧

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use quizcafe_domain::category::{Category, CategoryId};
use serde::Serialize;

use crate::{
    error::TriviaError,
    handler::question::{QuestionListResponse, QuestionState},
};

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// GET /categories
pub async fn list_categories(
    State(state): State<Arc<QuestionState>>,
) -> Result<Json<CategoriesResponse>, TriviaError> {
    let categories = state.usecase.list_categories().await?;

    Ok(Json(CategoriesResponse {
        categories: categories
            .iter()
            .map(Category::category_type)
            .map(str::to_string)
            .collect(),
    }))
}

/// GET /categories/{id}/questions
pub async fn questions_in_category(
    State(state): State<Arc<QuestionState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<QuestionListResponse>, TriviaError> {
    let Path(id) = id.map_err(|e| TriviaError::NotFound(e.body_text()))?;

    let listing = state.usecase.list_by_category(CategoryId::new(id)).await?;
    Ok(Json(listing.into()))
}
