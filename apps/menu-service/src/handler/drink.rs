//! # ドリンクハンドラ
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 必要な権限 | 表現 |
//! |---------|------|-----------|------|
//! | GET | `/drinks` | なし | short |
//! | GET | `/drinks-detail` | `get:drinks-detail` | long |
//! | POST | `/drinks` | `post:drinks` | long（全件） |
//! | PATCH | `/drinks/{id}` | `patch:drinks` | long（全件） |
//! | DELETE | `/drinks/{id}` | `delete:drinks` | - |
//!
//! 更新系のハンドラは認可ミドルウェアが格納した [`Claims`] を受け取り、
//! 操作者をユースケースの監査ログに渡す。

use std::sync::Arc;

use axum::{
    Extension,
    Json,
    extract::{
        Path,
        State,
        rejection::{JsonRejection, PathRejection},
    },
};
use quizcafe_domain::drink::{Drink, DrinkId, Ingredient, NewDrink, Recipe, ShortIngredient};
use serde::{Deserialize, Serialize};

use crate::{auth::Claims, error::MenuError, usecase::DrinkUseCaseImpl};

/// ドリンク API の共有状態
pub struct DrinkState {
    pub usecase: DrinkUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 作成・更新リクエスト
///
/// 作成では両方必須、更新では指定した項目のみ反映する。
#[derive(Debug, Deserialize)]
pub struct DrinkRequest {
    pub title:  Option<String>,
    pub recipe: Option<Recipe>,
}

/// short 表現（材料名を含まない）
#[derive(Debug, Serialize)]
pub struct ShortDrinkDto {
    pub id:     DrinkId,
    pub title:  String,
    pub recipe: Vec<ShortIngredient>,
}

impl From<&Drink> for ShortDrinkDto {
    fn from(drink: &Drink) -> Self {
        Self {
            id:     drink.id(),
            title:  drink.title().to_string(),
            recipe: drink.recipe().short(),
        }
    }
}

/// long 表現（レシピ全体）
#[derive(Debug, Serialize)]
pub struct LongDrinkDto {
    pub id:     DrinkId,
    pub title:  String,
    pub recipe: Vec<Ingredient>,
}

impl From<&Drink> for LongDrinkDto {
    fn from(drink: &Drink) -> Self {
        Self {
            id:     drink.id(),
            title:  drink.title().to_string(),
            recipe: drink.recipe().ingredients().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DrinksResponse<T> {
    pub success: bool,
    pub drinks:  Vec<T>,
}

impl<T> DrinksResponse<T> {
    fn from_drinks<'a>(drinks: &'a [Drink]) -> Self
    where
        T: From<&'a Drink>,
    {
        Self {
            success: true,
            drinks:  drinks.iter().map(T::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedDrinkResponse {
    pub success: bool,
    pub delete:  DrinkId,
}

fn parse_body(body: Result<Json<DrinkRequest>, JsonRejection>) -> Result<DrinkRequest, MenuError> {
    body.map(|Json(request)| request)
        .map_err(|e| MenuError::BadRequest(e.body_text()))
}

fn parse_id(id: Result<Path<i32>, PathRejection>) -> Result<DrinkId, MenuError> {
    id.map(|Path(id)| DrinkId::new(id))
        .map_err(|e| MenuError::NotFound(e.body_text()))
}

// --- ハンドラ ---

/// GET /drinks
pub async fn list_drinks_public(
    State(state): State<Arc<DrinkState>>,
) -> Result<Json<DrinksResponse<ShortDrinkDto>>, MenuError> {
    let drinks = state.usecase.list().await?;
    Ok(Json(DrinksResponse::from_drinks(&drinks)))
}

/// GET /drinks-detail
pub async fn list_drinks_detailed(
    State(state): State<Arc<DrinkState>>,
) -> Result<Json<DrinksResponse<LongDrinkDto>>, MenuError> {
    let drinks = state.usecase.list().await?;
    Ok(Json(DrinksResponse::from_drinks(&drinks)))
}

/// POST /drinks
pub async fn create_drink(
    State(state): State<Arc<DrinkState>>,
    Extension(claims): Extension<Claims>,
    body: Result<Json<DrinkRequest>, JsonRejection>,
) -> Result<Json<DrinksResponse<LongDrinkDto>>, MenuError> {
    let request = parse_body(body)?;
    let new_drink = NewDrink::from_parts(request.title, request.recipe)?;

    let drinks = state.usecase.create(new_drink, claims.actor()).await?;
    Ok(Json(DrinksResponse::from_drinks(&drinks)))
}

/// PATCH /drinks/{id}
pub async fn update_drink(
    State(state): State<Arc<DrinkState>>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<DrinkRequest>, JsonRejection>,
) -> Result<Json<DrinksResponse<LongDrinkDto>>, MenuError> {
    let id = parse_id(id)?;
    let request = parse_body(body)?;

    let drinks = state
        .usecase
        .update(id, request.title, request.recipe, claims.actor())
        .await?;
    Ok(Json(DrinksResponse::from_drinks(&drinks)))
}

/// DELETE /drinks/{id}
pub async fn delete_drink(
    State(state): State<Arc<DrinkState>>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeletedDrinkResponse>, MenuError> {
    let id = parse_id(id)?;

    state.usecase.delete(id, claims.actor()).await?;
    Ok(Json(DeletedDrinkResponse {
        success: true,
        delete:  id,
    }))
}
