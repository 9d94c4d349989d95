//! # ドリンクとレシピ
//!
//! メニュー API が扱うドリンクエンティティ。
//!
//! ## 表現
//!
//! | 表現 | 内容 | 用途 |
//! |------|------|------|
//! | short | レシピの色と分量のみ（材料名なし） | 公開一覧 `GET /drinks` |
//! | long | レシピ全体 | 権限付き API |
//!
//! レシピは内部では [`Ingredient`] のリストとして扱い、
//! 永続化時のみテキスト（JSON）に変換する。

use serde::{Deserialize, Serialize};

use crate::DomainError;

define_int_id! {
    /// ドリンク ID
    pub struct DrinkId;
}

/// レシピの材料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name:  String,
    pub color: String,
    pub parts: u32,
}

/// 材料名を含まない材料表現（short 表現用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: u32,
}

impl Ingredient {
    /// short 表現に変換する
    pub fn short(&self) -> ShortIngredient {
        ShortIngredient {
            color: self.color.clone(),
            parts: self.parts,
        }
    }
}

/// レシピ（材料のリスト）
///
/// JSON からの復元時は材料の配列に加えて単一の材料オブジェクトも受け付け、
/// 1 要素のリストとして扱う。シリアライズは常に配列になる。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RecipeRepr")]
pub struct Recipe(Vec<Ingredient>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RecipeRepr {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl From<RecipeRepr> for Recipe {
    fn from(repr: RecipeRepr) -> Self {
        match repr {
            RecipeRepr::Many(ingredients) => Self(ingredients),
            RecipeRepr::One(ingredient) => Self(vec![ingredient]),
        }
    }
}

impl Recipe {
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self(ingredients)
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.0
    }

    /// short 表現（色と分量のみ）のリストを返す
    pub fn short(&self) -> Vec<ShortIngredient> {
        self.0.iter().map(Ingredient::short).collect()
    }
}

/// ドリンクエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drink {
    id:     DrinkId,
    title:  String,
    recipe: Recipe,
}

impl Drink {
    /// DB から取得した値でドリンクを復元する
    pub fn from_db(id: DrinkId, title: String, recipe: Recipe) -> Self {
        Self { id, title, recipe }
    }

    pub fn id(&self) -> DrinkId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// 指定された項目だけを置き換えた新しいドリンクを返す
    ///
    /// `None` の項目は現在の値を維持する。
    pub fn with_changes(self, title: Option<String>, recipe: Option<Recipe>) -> Self {
        Self {
            id:     self.id,
            title:  title.unwrap_or(self.title),
            recipe: recipe.unwrap_or(self.recipe),
        }
    }
}

/// 作成前のドリンク（ID は DB が採番する）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDrink {
    pub title:  String,
    pub recipe: Recipe,
}

impl NewDrink {
    /// リクエストの各項目から作成前のドリンクを組み立てる
    ///
    /// `title` と `recipe` はどちらも必須。
    pub fn from_parts(title: Option<String>, recipe: Option<Recipe>) -> Result<Self, DomainError> {
        let title = title.ok_or_else(|| DomainError::Validation("title は必須です".to_string()))?;
        let recipe =
            recipe.ok_or_else(|| DomainError::Validation("recipe は必須です".to_string()))?;
        Ok(Self { title, recipe })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn water() -> Ingredient {
        Ingredient {
            name:  "Water".to_string(),
            color: "blue".to_string(),
            parts: 1,
        }
    }

    #[test]
    fn test_レシピは配列から復元できる() {
        let recipe: Recipe =
            serde_json::from_value(json!([{ "name": "Water", "color": "blue", "parts": 1 }]))
                .unwrap();

        assert_eq!(recipe, Recipe::new(vec![water()]));
    }

    #[test]
    fn test_単一の材料オブジェクトは1要素のレシピになる() {
        let recipe: Recipe =
            serde_json::from_value(json!({ "name": "Water", "color": "blue", "parts": 1 }))
                .unwrap();

        assert_eq!(recipe.ingredients(), &[water()]);
    }

    #[test]
    fn test_レシピは常に配列としてシリアライズされる() {
        let json = serde_json::to_value(Recipe::new(vec![water()])).unwrap();

        assert_eq!(
            json,
            json!([{ "name": "Water", "color": "blue", "parts": 1 }])
        );
    }

    #[test]
    fn test_short表現は材料名を含まない() {
        let recipe = Recipe::new(vec![water()]);

        let json = serde_json::to_value(recipe.short()).unwrap();

        assert_eq!(json, json!([{ "color": "blue", "parts": 1 }]));
    }

    #[test]
    fn test_with_changesは指定項目だけを置き換える() {
        let drink = Drink::from_db(DrinkId::new(1), "water".to_string(), Recipe::new(vec![water()]));

        let renamed = drink.clone().with_changes(Some("Water".to_string()), None);

        assert_eq!(renamed.title(), "Water");
        assert_eq!(renamed.recipe(), drink.recipe());
        assert_eq!(renamed.id(), drink.id());
    }

    #[test]
    fn test_titleまたはrecipeが欠けるとバリデーションエラー() {
        assert!(NewDrink::from_parts(None, Some(Recipe::new(vec![water()]))).is_err());
        assert!(NewDrink::from_parts(Some("water".to_string()), None).is_err());
        assert!(
            NewDrink::from_parts(Some("water".to_string()), Some(Recipe::new(vec![water()])))
                .is_ok()
        );
    }
}
