//! ドリンク管理ユースケース

use std::sync::Arc;

use quizcafe_domain::drink::{Drink, DrinkId, NewDrink, Recipe};
use quizcafe_infra::{InfraError, repository::DrinkRepository};

use crate::error::MenuError;

/// タイトルの一意制約名
const TITLE_UNIQUE_CONSTRAINT: &str = "drinks_title_key";

/// ドリンク管理ユースケース
pub struct DrinkUseCaseImpl {
    drink_repository: Arc<dyn DrinkRepository>,
}

impl DrinkUseCaseImpl {
    pub fn new(drink_repository: Arc<dyn DrinkRepository>) -> Self {
        Self { drink_repository }
    }

    /// すべてのドリンクを ID 順に取得する
    pub async fn list(&self) -> Result<Vec<Drink>, MenuError> {
        Ok(self.drink_repository.find_all().await?)
    }

    /// ドリンクを作成し、作成後の全ドリンクを返す
    ///
    /// タイトルが重複する場合は `BadRequest`。`actor` は操作したユーザー（監査ログ用）。
    pub async fn create(&self, drink: NewDrink, actor: &str) -> Result<Vec<Drink>, MenuError> {
        let created = self
            .drink_repository
            .insert(&drink)
            .await
            .map_err(title_conflict)?;
        tracing::info!(
            drink_id = %created.id(),
            title = created.title(),
            actor,
            "ドリンクを作成しました"
        );

        self.list().await
    }

    /// 指定された項目だけを更新し、更新後の全ドリンクを返す
    pub async fn update(
        &self,
        id: DrinkId,
        title: Option<String>,
        recipe: Option<Recipe>,
        actor: &str,
    ) -> Result<Vec<Drink>, MenuError> {
        let drink = self
            .drink_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| MenuError::NotFound(format!("ドリンク {id}")))?;

        let updated = drink.with_changes(title, recipe);
        // 取得から更新までの間に削除された場合も NotFound とする
        if !self
            .drink_repository
            .update(&updated)
            .await
            .map_err(title_conflict)?
        {
            return Err(MenuError::NotFound(format!("ドリンク {id}")));
        }
        tracing::info!(drink_id = %id, actor, "ドリンクを更新しました");

        self.list().await
    }

    /// ドリンクを削除する
    pub async fn delete(&self, id: DrinkId, actor: &str) -> Result<(), MenuError> {
        if !self.drink_repository.delete(id).await? {
            return Err(MenuError::NotFound(format!("ドリンク {id}")));
        }
        tracing::info!(drink_id = %id, actor, "ドリンクを削除しました");
        Ok(())
    }
}

/// タイトル重複（一意制約違反）を `BadRequest` に変換する
fn title_conflict(err: InfraError) -> MenuError {
    if err.constraint() == Some(TITLE_UNIQUE_CONSTRAINT) {
        return MenuError::BadRequest("同名のドリンクが既に存在します".to_string());
    }
    MenuError::Database(err)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use quizcafe_domain::drink::Ingredient;
    use quizcafe_infra::mock::MockDrinkRepository;

    use super::*;

    const ACTOR: &str = "auth0|manager";

    fn recipe(name: &str) -> Recipe {
        Recipe::new(vec![Ingredient {
            name:  name.to_string(),
            color: "brown".to_string(),
            parts: 1,
        }])
    }

    fn new_drink(title: &str) -> NewDrink {
        NewDrink {
            title:  title.to_string(),
            recipe: recipe("Coffee"),
        }
    }

    /// 更新の直前に別リクエストが同じドリンクを削除した状況を再現するリポジトリ
    struct DeletedBeforeUpdateRepository {
        inner: MockDrinkRepository,
    }

    #[async_trait]
    impl DrinkRepository for DeletedBeforeUpdateRepository {
        async fn find_all(&self) -> Result<Vec<Drink>, InfraError> {
            self.inner.find_all().await
        }

        async fn find_by_id(&self, id: DrinkId) -> Result<Option<Drink>, InfraError> {
            self.inner.find_by_id(id).await
        }

        async fn insert(&self, drink: &NewDrink) -> Result<Drink, InfraError> {
            self.inner.insert(drink).await
        }

        async fn update(&self, drink: &Drink) -> Result<bool, InfraError> {
            self.inner.delete(drink.id()).await?;
            self.inner.update(drink).await
        }

        async fn delete(&self, id: DrinkId) -> Result<bool, InfraError> {
            self.inner.delete(id).await
        }
    }

    #[tokio::test]
    async fn test_同じタイトルのドリンクは作成できない() {
        let sut = DrinkUseCaseImpl::new(Arc::new(MockDrinkRepository::new()));
        sut.create(new_drink("Latte"), ACTOR).await.unwrap();

        let result = sut.create(new_drink("Latte"), ACTOR).await;

        assert!(matches!(result, Err(MenuError::BadRequest(_))));
        assert_eq!(sut.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_更新で省略した項目は維持される() {
        let sut = DrinkUseCaseImpl::new(Arc::new(MockDrinkRepository::new()));
        let drinks = sut.create(new_drink("Latte"), ACTOR).await.unwrap();
        let id = drinks[0].id();

        let drinks = sut
            .update(id, Some("Flat White".to_string()), None, ACTOR)
            .await
            .unwrap();

        assert_eq!(drinks[0].title(), "Flat White");
        assert_eq!(drinks[0].recipe(), &recipe("Coffee"));
    }

    #[tokio::test]
    async fn test_存在しないドリンクの更新はnot_found() {
        let sut = DrinkUseCaseImpl::new(Arc::new(MockDrinkRepository::new()));

        let result = sut.update(DrinkId::new(42), None, None, ACTOR).await;

        assert!(matches!(result, Err(MenuError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_取得後に削除されたドリンクの更新はnot_found() {
        // Given
        let inner = MockDrinkRepository::new();
        inner.add_drink(Drink::from_db(
            DrinkId::new(1),
            "Latte".to_string(),
            recipe("Coffee"),
        ));
        let sut = DrinkUseCaseImpl::new(Arc::new(DeletedBeforeUpdateRepository {
            inner: inner.clone(),
        }));

        // When
        let result = sut
            .update(DrinkId::new(1), Some("Mocha".to_string()), None, ACTOR)
            .await;

        // Then
        assert!(matches!(result, Err(MenuError::NotFound(_))));
        assert!(inner.get(DrinkId::new(1)).is_none());
    }

    #[tokio::test]
    async fn test_同じドリンクを2回削除すると2回目はnot_found() {
        let sut = DrinkUseCaseImpl::new(Arc::new(MockDrinkRepository::new()));
        let id = sut.create(new_drink("Latte"), ACTOR).await.unwrap()[0].id();

        assert!(sut.delete(id, ACTOR).await.is_ok());
        assert!(matches!(
            sut.delete(id, ACTOR).await,
            Err(MenuError::NotFound(_))
        ));
    }
}
