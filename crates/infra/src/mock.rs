//! # テスト用モックリポジトリ
//!
//! ルーターテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! quizcafe-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 一意制約・外部キー制約は PostgreSQL と同じ制約名の
//! [`InfraErrorKind::ConstraintViolation`](crate::InfraErrorKind) として再現する。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quizcafe_domain::{
    category::{Category, CategoryId},
    drink::{Drink, DrinkId, NewDrink},
    question::{NewQuestion, Page, Question, QuestionId},
};

use crate::{
    error::InfraError,
    repository::{CategoryRepository, DrinkRepository, QuestionRepository},
};

// ===== MockCategoryRepository =====

#[derive(Clone, Default)]
pub struct MockCategoryRepository {
    categories: Arc<Mutex<Vec<Category>>>,
}

impl MockCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// シードと同じ 6 カテゴリを持つリポジトリを作成する
    pub fn seeded() -> Self {
        let repo = Self::new();
        for (id, label) in [
            (1, "Science"),
            (2, "Art"),
            (3, "Geography"),
            (4, "History"),
            (5, "Entertainment"),
            (6, "Sports"),
        ] {
            repo.add_category(Category::from_db(CategoryId::new(id), label.to_string()));
        }
        repo
    }

    pub fn add_category(&self, category: Category) {
        self.categories.lock().unwrap().push(category);
    }

    pub fn ids(&self) -> Vec<CategoryId> {
        self.categories.lock().unwrap().iter().map(Category::id).collect()
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, InfraError> {
        let mut categories = self.categories.lock().unwrap().clone();
        categories.sort_by_key(Category::id);
        Ok(categories)
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, InfraError> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }
}

// ===== MockQuestionRepository =====

#[derive(Clone, Default)]
pub struct MockQuestionRepository {
    questions:    Arc<Mutex<Vec<Question>>>,
    next_id:      Arc<Mutex<i32>>,
    /// `Some` の場合、含まれないカテゴリへの挿入は外部キー制約違反になる
    category_ids: Option<Vec<CategoryId>>,
}

impl MockQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 外部キー制約を再現するカテゴリ ID を指定して作成する
    pub fn with_categories(category_ids: Vec<CategoryId>) -> Self {
        Self {
            category_ids: Some(category_ids),
            ..Self::default()
        }
    }

    /// 問題を追加する（ID はそのまま使い、採番カウンタを追従させる）
    pub fn add_question(&self, question: Question) {
        let mut questions = self.questions.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(question.id().as_i32());
        questions.push(question);
    }

    pub fn len(&self) -> usize {
        self.questions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sorted(&self) -> Vec<Question> {
        let mut questions = self.questions.lock().unwrap().clone();
        questions.sort_by_key(Question::id);
        questions
    }
}

#[async_trait]
impl QuestionRepository for MockQuestionRepository {
    async fn find_all(&self) -> Result<Vec<Question>, InfraError> {
        Ok(self.sorted())
    }

    async fn find_page(&self, page: Page) -> Result<Vec<Question>, InfraError> {
        Ok(self
            .sorted()
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn count(&self) -> Result<i64, InfraError> {
        Ok(self.len() as i64)
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, InfraError> {
        Ok(self.sorted().into_iter().find(|q| q.id() == id))
    }

    async fn find_by_category(&self, category: CategoryId) -> Result<Vec<Question>, InfraError> {
        Ok(self
            .sorted()
            .into_iter()
            .filter(|q| q.category() == category)
            .collect())
    }

    async fn find_by_substring(&self, term: &str) -> Result<Vec<Question>, InfraError> {
        let term = term.to_lowercase();
        Ok(self
            .sorted()
            .into_iter()
            .filter(|q| q.question().to_lowercase().contains(&term))
            .collect())
    }

    async fn insert(&self, question: &NewQuestion) -> Result<Question, InfraError> {
        if let Some(ids) = &self.category_ids
            && !ids.contains(&question.category)
        {
            return Err(InfraError::constraint_violation("questions_category_fkey"));
        }

        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            *next_id
        };
        let created = Question::from_db(
            QuestionId::new(id),
            question.question.clone(),
            question.answer.clone(),
            question.category,
            question.difficulty,
        );
        self.questions.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, InfraError> {
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id() != id);
        Ok(questions.len() < before)
    }
}

// ===== MockDrinkRepository =====

#[derive(Clone, Default)]
pub struct MockDrinkRepository {
    drinks:  Arc<Mutex<Vec<Drink>>>,
    next_id: Arc<Mutex<i32>>,
}

impl MockDrinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_drink(&self, drink: Drink) {
        let mut drinks = self.drinks.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(drink.id().as_i32());
        drinks.push(drink);
    }

    pub fn get(&self, id: DrinkId) -> Option<Drink> {
        self.drinks.lock().unwrap().iter().find(|d| d.id() == id).cloned()
    }

    fn title_taken(drinks: &[Drink], title: &str, except: Option<DrinkId>) -> bool {
        drinks
            .iter()
            .any(|d| d.title() == title && Some(d.id()) != except)
    }
}

#[async_trait]
impl DrinkRepository for MockDrinkRepository {
    async fn find_all(&self) -> Result<Vec<Drink>, InfraError> {
        let mut drinks = self.drinks.lock().unwrap().clone();
        drinks.sort_by_key(Drink::id);
        Ok(drinks)
    }

    async fn find_by_id(&self, id: DrinkId) -> Result<Option<Drink>, InfraError> {
        Ok(self.get(id))
    }

    async fn insert(&self, drink: &NewDrink) -> Result<Drink, InfraError> {
        let mut drinks = self.drinks.lock().unwrap();
        if Self::title_taken(&drinks, &drink.title, None) {
            return Err(InfraError::constraint_violation("drinks_title_key"));
        }

        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            *next_id
        };
        let created = Drink::from_db(DrinkId::new(id), drink.title.clone(), drink.recipe.clone());
        drinks.push(created.clone());
        Ok(created)
    }

    async fn update(&self, drink: &Drink) -> Result<bool, InfraError> {
        let mut drinks = self.drinks.lock().unwrap();
        if Self::title_taken(&drinks, drink.title(), Some(drink.id())) {
            return Err(InfraError::constraint_violation("drinks_title_key"));
        }
        match drinks.iter_mut().find(|d| d.id() == drink.id()) {
            Some(existing) => {
                *existing = drink.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: DrinkId) -> Result<bool, InfraError> {
        let mut drinks = self.drinks.lock().unwrap();
        let before = drinks.len();
        drinks.retain(|d| d.id() != id);
        Ok(drinks.len() < before)
    }
}
