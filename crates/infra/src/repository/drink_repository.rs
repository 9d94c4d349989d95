//! # DrinkRepository
//!
//! ドリンクの永続化を担当するリポジトリ。
//!
//! レシピは `drinks.recipe` 列に JSON テキストとして保存する。
//! テキストとの相互変換はこのリポジトリの境界でのみ行い、
//! 上位層は常に [`Recipe`] として扱う。

use async_trait::async_trait;
use quizcafe_domain::drink::{Drink, DrinkId, NewDrink, Recipe};
use sqlx::PgPool;

use crate::error::InfraError;

/// ドリンクリポジトリトレイト
#[async_trait]
pub trait DrinkRepository: Send + Sync {
    /// すべてのドリンクを ID 順に取得する
    async fn find_all(&self) -> Result<Vec<Drink>, InfraError>;

    /// ID でドリンクを検索する
    async fn find_by_id(&self, id: DrinkId) -> Result<Option<Drink>, InfraError>;

    /// ドリンクを挿入し、採番された ID を含むドリンクを返す
    ///
    /// タイトルが重複する場合は一意制約（`drinks_title_key`）違反になる。
    async fn insert(&self, drink: &NewDrink) -> Result<Drink, InfraError>;

    /// ドリンクのタイトルとレシピを更新する
    ///
    /// 更新した場合は `true`、該当するドリンクがなかった場合は `false` を返す。
    async fn update(&self, drink: &Drink) -> Result<bool, InfraError>;

    /// ドリンクを削除する
    ///
    /// 削除した場合は `true`、該当するドリンクがなかった場合は `false` を返す。
    async fn delete(&self, id: DrinkId) -> Result<bool, InfraError>;
}

/// PostgreSQL 実装の DrinkRepository
#[derive(Debug, Clone)]
pub struct PostgresDrinkRepository {
    pool: PgPool,
}

impl PostgresDrinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DrinkRow {
    id:     i32,
    title:  String,
    recipe: String,
}

impl TryFrom<DrinkRow> for Drink {
    type Error = InfraError;

    fn try_from(row: DrinkRow) -> Result<Self, Self::Error> {
        Ok(Drink::from_db(
            DrinkId::new(row.id),
            row.title,
            decode_recipe(&row.recipe)?,
        ))
    }
}

/// レシピを保存用のテキストに変換する
pub(crate) fn encode_recipe(recipe: &Recipe) -> Result<String, InfraError> {
    Ok(serde_json::to_string(recipe)?)
}

/// 保存されたテキストからレシピを復元する
pub(crate) fn decode_recipe(text: &str) -> Result<Recipe, InfraError> {
    Ok(serde_json::from_str(text)?)
}

#[async_trait]
impl DrinkRepository for PostgresDrinkRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Drink>, InfraError> {
        let rows = sqlx::query_as::<_, DrinkRow>(
            r#"
            SELECT id, title, recipe
            FROM drinks
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Drink::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: DrinkId) -> Result<Option<Drink>, InfraError> {
        let row = sqlx::query_as::<_, DrinkRow>(
            r#"
            SELECT id, title, recipe
            FROM drinks
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Drink::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, drink: &NewDrink) -> Result<Drink, InfraError> {
        let row = sqlx::query_as::<_, DrinkRow>(
            r#"
            INSERT INTO drinks (title, recipe)
            VALUES ($1, $2)
            RETURNING id, title, recipe
            "#,
        )
        .bind(&drink.title)
        .bind(encode_recipe(&drink.recipe)?)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %drink.id()))]
    async fn update(&self, drink: &Drink) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE drinks
            SET title = $2, recipe = $3
            WHERE id = $1
            "#,
        )
        .bind(drink.id().as_i32())
        .bind(drink.title())
        .bind(encode_recipe(drink.recipe())?)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: DrinkId) -> Result<bool, InfraError> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
