//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するシードデータ定数と
//! エンティティ生成ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use quizcafe_domain::{
    category::CategoryId,
    drink::{Ingredient, NewDrink, Recipe},
    question::NewQuestion,
};

/// マイグレーションで投入されるカテゴリ（ID 順）
pub const SEED_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// 作成前の問題を生成する
pub fn new_question(text: &str, category: i32) -> NewQuestion {
    NewQuestion {
        question:   text.to_string(),
        answer:     format!("{text} の答え"),
        category:   CategoryId::new(category),
        difficulty: 2,
    }
}

pub fn ingredient(name: &str, color: &str, parts: u32) -> Ingredient {
    Ingredient {
        name:  name.to_string(),
        color: color.to_string(),
        parts,
    }
}

/// 作成前のドリンクを生成する
pub fn new_drink(title: &str) -> NewDrink {
    NewDrink {
        title:  title.to_string(),
        recipe: Recipe::new(vec![
            ingredient("Milk", "grey", 1),
            ingredient("Coffee", "brown", 2),
        ]),
    }
}
