//! # CategoryRepository
//!
//! 問題カテゴリの読み取りを担当するリポジトリ。
//! カテゴリはシードデータとして投入されるため、書き込みメソッドは持たない。

use async_trait::async_trait;
use quizcafe_domain::category::{Category, CategoryId};
use sqlx::PgPool;

use crate::error::InfraError;

/// カテゴリリポジトリトレイト
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// すべてのカテゴリを ID 順に取得する
    async fn find_all(&self) -> Result<Vec<Category>, InfraError>;

    /// ID でカテゴリを検索する
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, InfraError>;
}

/// PostgreSQL 実装の CategoryRepository
#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id:            i32,
    category_type: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category::from_db(CategoryId::new(row.id), row.category_type)
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Category>, InfraError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, "type" AS category_type
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, InfraError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, "type" AS category_type
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Category::from))
    }
}
