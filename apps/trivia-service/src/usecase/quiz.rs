//! クイズ出題のユースケース

use std::sync::Arc;

use quizcafe_domain::{
    question::{Question, QuestionId},
    quiz::{QuizScope, pick_next},
};
use quizcafe_infra::repository::QuestionRepository;

use crate::error::TriviaError;

/// クイズ出題のユースケース
pub struct QuizUseCaseImpl {
    question_repository: Arc<dyn QuestionRepository>,
}

impl QuizUseCaseImpl {
    pub fn new(question_repository: Arc<dyn QuestionRepository>) -> Self {
        Self {
            question_repository,
        }
    }

    /// 出題範囲から、まだ出題していない問題を 1 問ランダムに選ぶ
    ///
    /// 候補が尽きた場合は `None`。
    pub async fn next_question(
        &self,
        scope: QuizScope,
        previous: &[QuestionId],
    ) -> Result<Option<Question>, TriviaError> {
        let candidates = match scope {
            QuizScope::AnyCategory => self.question_repository.find_all().await?,
            QuizScope::Category(category) => {
                self.question_repository.find_by_category(category).await?
            }
        };

        // ThreadRng は Send ではないため、await の後で生成する
        let mut rng = rand::rng();
        Ok(pick_next(&candidates, previous, &mut rng).cloned())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quizcafe_domain::category::CategoryId;
    use quizcafe_infra::mock::MockQuestionRepository;

    use super::*;

    fn repo_with(questions: &[(i32, i32)]) -> MockQuestionRepository {
        let repo = MockQuestionRepository::new();
        for &(id, category) in questions {
            repo.add_question(Question::from_db(
                QuestionId::new(id),
                format!("Q{id}"),
                "A".to_string(),
                CategoryId::new(category),
                1,
            ));
        }
        repo
    }

    #[tokio::test]
    async fn test_出題済みの問題は選ばれず尽きたらnoneになる() {
        // Given
        let sut = QuizUseCaseImpl::new(Arc::new(repo_with(&[(1, 1), (2, 1), (3, 2)])));
        let mut previous = Vec::new();

        // When: 全カテゴリから候補が尽きるまで出題する
        for _ in 0..3 {
            let next = sut
                .next_question(QuizScope::AnyCategory, &previous)
                .await
                .unwrap()
                .unwrap();
            assert!(!previous.contains(&next.id()));
            previous.push(next.id());
        }

        // Then
        let next = sut
            .next_question(QuizScope::AnyCategory, &previous)
            .await
            .unwrap();
        assert_eq!(next, None);
    }

    #[tokio::test]
    async fn test_カテゴリ指定時はそのカテゴリの問題のみ選ばれる() {
        let sut = QuizUseCaseImpl::new(Arc::new(repo_with(&[(1, 1), (2, 2), (3, 2)])));

        for _ in 0..10 {
            let next = sut
                .next_question(QuizScope::Category(CategoryId::new(2)), &[])
                .await
                .unwrap()
                .unwrap();
            assert_eq!(next.category(), CategoryId::new(2));
        }
    }
}
