//! # 問題カテゴリ
//!
//! トリビア問題の分類。API からは読み取り専用で、シードデータとして投入される。

use serde::{Deserialize, Serialize};

define_int_id! {
    /// カテゴリ ID
    pub struct CategoryId;
}

/// カテゴリエンティティ
///
/// `category_type` は JSON 上 `type` として表現されるラベル（"Science" など）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id:            CategoryId,
    #[serde(rename = "type")]
    category_type: String,
}

impl Category {
    /// DB から取得した値でカテゴリを復元する
    pub fn from_db(id: CategoryId, category_type: String) -> Self {
        Self { id, category_type }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn category_type(&self) -> &str {
        &self.category_type
    }
}
