//! # QuestionRepository
//!
//! トリビア問題の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ページングは DB で行う**: 全件をメモリに読み込んでから切り出すのではなく、
//!   `ORDER BY id LIMIT/OFFSET` で必要な範囲のみを取得する
//! - **部分一致検索**: 大文字小文字を区別しない（`ILIKE`）。
//!   検索語に含まれる `%` と `_` はワイルドカードではなく文字として扱う

use async_trait::async_trait;
use quizcafe_domain::{
    category::CategoryId,
    question::{NewQuestion, Page, Question, QuestionId},
};
use sqlx::PgPool;

use crate::error::InfraError;

/// 問題リポジトリトレイト
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// すべての問題を ID 順に取得する
    async fn find_all(&self) -> Result<Vec<Question>, InfraError>;

    /// 指定ページの問題を ID 順に取得する
    async fn find_page(&self, page: Page) -> Result<Vec<Question>, InfraError>;

    /// 問題の総数を取得する
    async fn count(&self) -> Result<i64, InfraError>;

    /// ID で問題を検索する
    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, InfraError>;

    /// カテゴリに属する問題を取得する
    async fn find_by_category(&self, category: CategoryId) -> Result<Vec<Question>, InfraError>;

    /// 問題文に検索語を含む問題を取得する（大文字小文字を区別しない）
    async fn find_by_substring(&self, term: &str) -> Result<Vec<Question>, InfraError>;

    /// 問題を挿入し、採番された ID を含む問題を返す
    ///
    /// 存在しないカテゴリを参照している場合は外部キー制約違反になる。
    async fn insert(&self, question: &NewQuestion) -> Result<Question, InfraError>;

    /// 問題を削除する
    ///
    /// 削除した場合は `true`、該当する問題がなかった場合は `false` を返す。
    async fn delete(&self, id: QuestionId) -> Result<bool, InfraError>;
}

/// PostgreSQL 実装の QuestionRepository
#[derive(Debug, Clone)]
pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct QuestionRow {
    id:         i32,
    question:   String,
    answer:     String,
    category:   i32,
    difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question::from_db(
            QuestionId::new(row.id),
            row.question,
            row.answer,
            CategoryId::new(row.category),
            row.difficulty,
        )
    }
}

/// LIKE パターン中の特殊文字をエスケープする
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Question>, InfraError> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(page = page.as_i64()))]
    async fn find_page(&self, page: Page) -> Result<Vec<Question>, InfraError> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn count(&self) -> Result<i64, InfraError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, InfraError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Question::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%category))]
    async fn find_by_category(&self, category: CategoryId) -> Result<Vec<Question>, InfraError> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category.as_i32())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_by_substring(&self, term: &str) -> Result<Vec<Question>, InfraError> {
        let pattern = format!("%{}%", escape_like(term));

        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(category = %question.category))]
    async fn insert(&self, question: &NewQuestion) -> Result<Question, InfraError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category.as_i32())
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: QuestionId) -> Result<bool, InfraError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
