//! # クイズ出題
//!
//! クイズの出題範囲（カテゴリ）と、未出題の問題から次の 1 問を選ぶロジック。
//!
//! ## カテゴリ指定の規約
//!
//! クライアントはカテゴリ選択を `{id, type}` で送る:
//!
//! - `type == "click"` は「全カテゴリ」を表す番兵値（実在のカテゴリ名ではない）
//! - それ以外は 0 始まりの選択肢インデックスを `id` に持つため、
//!   DB のカテゴリ ID（1 始まり）は `id + 1` になる
//!
//! 既存クライアントとの互換のため、この +1 のずれはそのまま維持する。

use rand::{Rng, seq::IndexedRandom};

use crate::{
    category::CategoryId,
    question::{Question, QuestionId},
};

/// 全カテゴリを表す `type` の番兵値
pub const ANY_CATEGORY: &str = "click";

/// 出題範囲
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    /// 全カテゴリから出題する
    AnyCategory,
    /// 指定カテゴリのみから出題する
    Category(CategoryId),
}

impl QuizScope {
    /// クライアントのカテゴリ選択から出題範囲を決定する
    ///
    /// ```rust
    /// use quizcafe_domain::{category::CategoryId, quiz::QuizScope};
    ///
    /// assert_eq!(QuizScope::from_selector(0, "click"), QuizScope::AnyCategory);
    /// assert_eq!(
    ///     QuizScope::from_selector(0, "Science"),
    ///     QuizScope::Category(CategoryId::new(1))
    /// );
    /// ```
    pub fn from_selector(selector_id: i32, selector_type: &str) -> Self {
        if selector_type == ANY_CATEGORY {
            return Self::AnyCategory;
        }
        Self::Category(CategoryId::new(selector_id.saturating_add(1)))
    }

    /// 問題が出題範囲に含まれるか判定する
    pub fn includes(&self, question: &Question) -> bool {
        match self {
            Self::AnyCategory => true,
            Self::Category(category) => question.category() == *category,
        }
    }
}

/// 出題済みの問題を除いた候補から、一様ランダムに 1 問を選ぶ
///
/// 候補が残っていない場合は `None` を返す。
pub fn pick_next<'a, R>(
    candidates: &'a [Question],
    previous: &[QuestionId],
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let eligible: Vec<&Question> = candidates
        .iter()
        .filter(|q| !previous.contains(&q.id()))
        .collect();

    eligible.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn question(id: i32, category: i32) -> Question {
        Question::from_db(
            QuestionId::new(id),
            format!("Q{id}"),
            format!("A{id}"),
            CategoryId::new(category),
            1,
        )
    }

    #[test]
    fn test_clickは全カテゴリを表す() {
        let sut = QuizScope::from_selector(4, "click");

        assert_eq!(sut, QuizScope::AnyCategory);
        assert!(sut.includes(&question(1, 6)));
    }

    #[test]
    fn test_カテゴリ指定はidに1を加えたカテゴリになる() {
        let sut = QuizScope::from_selector(2, "Geography");

        assert_eq!(sut, QuizScope::Category(CategoryId::new(3)));
        assert!(sut.includes(&question(1, 3)));
        assert!(!sut.includes(&question(2, 2)));
    }

    #[test]
    fn test_出題済みの問題は選ばれない() {
        let candidates = vec![question(1, 1), question(2, 1), question(3, 1)];
        let previous = vec![QuestionId::new(1), QuestionId::new(3)];
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let picked = pick_next(&candidates, &previous, &mut rng).unwrap();
            assert_eq!(picked.id(), QuestionId::new(2));
        }
    }

    #[test]
    fn test_候補を使い切るとnoneを返す() {
        let candidates = vec![question(1, 1), question(2, 1)];
        let previous = vec![QuestionId::new(1), QuestionId::new(2)];
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(pick_next(&candidates, &previous, &mut rng), None);
        assert_eq!(pick_next(&[], &[], &mut rng), None);
    }

    #[test]
    fn test_繰り返し出題すると全問が一度ずつ選ばれる() {
        let candidates: Vec<Question> = (1..=5).map(|id| question(id, 1)).collect();
        let mut previous = Vec::new();
        let mut rng = StdRng::seed_from_u64(42);

        while let Some(picked) = pick_next(&candidates, &previous, &mut rng) {
            previous.push(picked.id());
        }

        let unique: HashSet<_> = previous.iter().copied().collect();
        assert_eq!(previous.len(), 5);
        assert_eq!(unique.len(), 5);
    }
}
