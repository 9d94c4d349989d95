//! # トリビア問題
//!
//! 問題エンティティと、一覧表示のページングを扱う値オブジェクトを定義する。
//!
//! ## ライフサイクル
//!
//! - 作成: 問題文・解答・カテゴリ・難易度の 4 項目すべてが必須
//! - 削除: ID 指定
//! - 更新: なし（作成後に内容を変更する API は提供しない）

use serde::{Deserialize, Serialize};

use crate::{DomainError, category::CategoryId};

/// 1 ページあたりの問題数
pub const QUESTIONS_PER_PAGE: i64 = 10;

define_int_id! {
    /// 問題 ID
    pub struct QuestionId;
}

/// 問題エンティティ
///
/// JSON 表現は `{id, question, answer, category, difficulty}`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id:         QuestionId,
    question:   String,
    answer:     String,
    category:   CategoryId,
    difficulty: i32,
}

impl Question {
    /// DB から取得した値で問題を復元する
    pub fn from_db(
        id: QuestionId,
        question: String,
        answer: String,
        category: CategoryId,
        difficulty: i32,
    ) -> Self {
        Self {
            id,
            question,
            answer,
            category,
            difficulty,
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }
}

/// 作成前の問題（ID は DB が採番する）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question:   String,
    pub answer:     String,
    pub category:   CategoryId,
    pub difficulty: i32,
}

impl NewQuestion {
    /// リクエストの各項目から作成前の問題を組み立てる
    ///
    /// 4 項目のいずれかが欠けている（`None`）場合は `DomainError::Validation` を返す。
    /// 空文字列は欠落とはみなさない。
    pub fn from_parts(
        question: Option<String>,
        answer: Option<String>,
        category: Option<CategoryId>,
        difficulty: Option<i32>,
    ) -> Result<Self, DomainError> {
        let missing = |field: &str| DomainError::Validation(format!("{field} は必須です"));

        Ok(Self {
            question:   question.ok_or_else(|| missing("question"))?,
            answer:     answer.ok_or_else(|| missing("answer"))?,
            category:   category.ok_or_else(|| missing("category"))?,
            difficulty: difficulty.ok_or_else(|| missing("difficulty"))?,
        })
    }
}

/// ページ番号（値オブジェクト）
///
/// 1 始まり。ページ N は ID 順の `(N-1)*10 .. N*10` 番目の問題を指す。
///
/// ```rust
/// use quizcafe_domain::question::Page;
///
/// let page = Page::new(3).unwrap();
/// assert_eq!(page.offset(), 20);
/// assert_eq!(page.limit(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    /// ページ番号を作成する
    ///
    /// 1 未満の場合は `DomainError::Validation` を返す。
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < 1 {
            return Err(DomainError::Validation(format!(
                "page は 1 以上である必要があります: {value}"
            )));
        }
        Ok(Self(value))
    }

    /// 文字列（クエリパラメータ）からページ番号をパースする
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let number = value.trim().parse::<i64>().map_err(|_| {
            DomainError::Validation(format!("page は整数である必要があります: {value:?}"))
        })?;
        Self::new(number)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// 読み飛ばす件数
    pub fn offset(&self) -> i64 {
        (self.0 - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }

    /// 取得件数
    pub fn limit(&self) -> i64 {
        QUESTIONS_PER_PAGE
    }
}
