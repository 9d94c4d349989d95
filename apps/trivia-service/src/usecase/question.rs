//! 問題・カテゴリのユースケース

use std::sync::Arc;

use quizcafe_domain::{
    category::{Category, CategoryId},
    question::{NewQuestion, Page, Question, QuestionId},
};
use quizcafe_infra::repository::{CategoryRepository, QuestionRepository};

use crate::error::TriviaError;

/// 一覧系 API の結果
///
/// ページ表示・検索・カテゴリ絞り込みで共通の形。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionListing {
    pub questions:        Vec<Question>,
    /// 条件に一致する問題の総数（ページングの場合はページ外も含む）
    pub total_questions:  i64,
    pub categories:       Vec<Category>,
    pub current_category: Option<Category>,
}

/// 問題・カテゴリのユースケース
pub struct QuestionUseCaseImpl {
    question_repository: Arc<dyn QuestionRepository>,
    category_repository: Arc<dyn CategoryRepository>,
}

impl QuestionUseCaseImpl {
    pub fn new(
        question_repository: Arc<dyn QuestionRepository>,
        category_repository: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            question_repository,
            category_repository,
        }
    }

    /// すべてのカテゴリを ID 順に取得する
    pub async fn list_categories(&self) -> Result<Vec<Category>, TriviaError> {
        Ok(self.category_repository.find_all().await?)
    }

    /// 指定ページの問題を取得する
    ///
    /// 最終ページより後を指定した場合は空のリストを返す（エラーにはしない）。
    pub async fn list_page(&self, page: Page) -> Result<QuestionListing, TriviaError> {
        let questions = self.question_repository.find_page(page).await?;
        let total_questions = self.question_repository.count().await?;

        Ok(QuestionListing {
            questions,
            total_questions,
            categories: self.list_categories().await?,
            current_category: None,
        })
    }

    /// 問題文に `term` を含む問題を検索する（大文字小文字を区別しない）
    pub async fn search(&self, term: &str) -> Result<QuestionListing, TriviaError> {
        let questions = self.question_repository.find_by_substring(term).await?;

        Ok(QuestionListing {
            total_questions: questions.len() as i64,
            questions,
            categories: self.list_categories().await?,
            current_category: None,
        })
    }

    /// カテゴリに属する問題を取得する
    ///
    /// カテゴリが存在しない場合は `NotFound`。
    pub async fn list_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<QuestionListing, TriviaError> {
        let category = self
            .category_repository
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| TriviaError::NotFound(format!("カテゴリ {category_id}")))?;

        let questions = self
            .question_repository
            .find_by_category(category_id)
            .await?;

        Ok(QuestionListing {
            total_questions: questions.len() as i64,
            questions,
            categories: self.list_categories().await?,
            current_category: Some(category),
        })
    }

    /// 問題を作成する
    ///
    /// 存在しないカテゴリは DB の外部キー制約で弾かれ、`Database` エラーになる。
    pub async fn create(&self, question: NewQuestion) -> Result<Question, TriviaError> {
        let created = self.question_repository.insert(&question).await?;
        tracing::info!(question_id = %created.id(), "問題を作成しました");
        Ok(created)
    }

    /// 問題を削除する
    pub async fn delete(&self, id: QuestionId) -> Result<(), TriviaError> {
        if !self.question_repository.delete(id).await? {
            return Err(TriviaError::NotFound(format!("問題 {id}")));
        }
        tracing::info!(question_id = %id, "問題を削除しました");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quizcafe_infra::mock::{MockCategoryRepository, MockQuestionRepository};

    use super::*;

    fn question(id: i32, text: &str, category: i32) -> Question {
        Question::from_db(
            QuestionId::new(id),
            text.to_string(),
            "answer".to_string(),
            CategoryId::new(category),
            1,
        )
    }

    fn sut(questions: &MockQuestionRepository) -> QuestionUseCaseImpl {
        QuestionUseCaseImpl::new(
            Arc::new(questions.clone()),
            Arc::new(MockCategoryRepository::seeded()),
        )
    }

    #[tokio::test]
    async fn test_全ページを連結すると全件が重複なく得られる() {
        // Given
        let repo = MockQuestionRepository::new();
        for id in 1..=23 {
            repo.add_question(question(id, &format!("Q{id}"), 1));
        }
        let sut = sut(&repo);

        // When
        let mut collected = Vec::new();
        for page in 1..=4 {
            let listing = sut.list_page(Page::new(page).unwrap()).await.unwrap();
            assert!(listing.questions.len() <= 10);
            assert_eq!(listing.total_questions, 23);
            collected.extend(listing.questions.iter().map(|q| q.id().as_i32()));
        }

        // Then
        assert_eq!(collected, (1..=23).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_検索は大文字小文字を区別しない() {
        let repo = MockQuestionRepository::new();
        repo.add_question(question(1, "What is the Title of the book?", 2));
        repo.add_question(question(2, "Whose autobiography is entitled X?", 4));
        repo.add_question(question(3, "How many moons?", 1));
        let sut = sut(&repo);

        let listing = sut.search("TITLE").await.unwrap();

        let ids: Vec<i32> = listing.questions.iter().map(|q| q.id().as_i32()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(listing.total_questions, 2);
        assert_eq!(listing.current_category, None);
    }

    #[tokio::test]
    async fn test_存在しないカテゴリの問題一覧はnot_found() {
        let sut = sut(&MockQuestionRepository::new());

        let result = sut.list_by_category(CategoryId::new(66)).await;

        assert!(matches!(result, Err(TriviaError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_カテゴリの問題一覧は現在のカテゴリを含む() {
        let repo = MockQuestionRepository::new();
        repo.add_question(question(1, "Q1", 1));
        repo.add_question(question(2, "Q2", 2));
        let sut = sut(&repo);

        let listing = sut.list_by_category(CategoryId::new(2)).await.unwrap();

        assert_eq!(listing.questions, vec![question(2, "Q2", 2)]);
        assert_eq!(
            listing.current_category.map(|c| c.category_type().to_string()),
            Some("Art".to_string())
        );
    }

    #[tokio::test]
    async fn test_同じ問題を2回削除すると2回目はnot_found() {
        let repo = MockQuestionRepository::new();
        repo.add_question(question(5, "Q5", 1));
        let sut = sut(&repo);

        assert!(sut.delete(QuestionId::new(5)).await.is_ok());
        assert!(matches!(
            sut.delete(QuestionId::new(5)).await,
            Err(TriviaError::NotFound(_))
        ));
    }
}
