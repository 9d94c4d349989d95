//! # 権限
//!
//! メニュー API の操作権限を表す値オブジェクト。
//!
//! 権限は外部の認可サーバーが発行したトークンの `permissions` クレームに
//! 文字列として含まれる。照合は完全一致で行う（ワイルドカードなし）。
//!
//! | 権限 | 対象操作 |
//! |------|---------|
//! | `get:drinks-detail` | `GET /drinks-detail` |
//! | `post:drinks` | `POST /drinks` |
//! | `patch:drinks` | `PATCH /drinks/{id}` |
//! | `delete:drinks` | `DELETE /drinks/{id}` |

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 権限（値オブジェクト）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct Permission(String);

impl Permission {
    pub const GET_DRINKS_DETAIL: &'static str = "get:drinks-detail";
    pub const POST_DRINKS: &'static str = "post:drinks";
    pub const PATCH_DRINKS: &'static str = "patch:drinks";
    pub const DELETE_DRINKS: &'static str = "delete:drinks";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 保持している権限のいずれかが、この権限と一致するか判定する
    ///
    /// ```rust
    /// use quizcafe_domain::permission::Permission;
    ///
    /// let held = vec!["get:drinks-detail".to_string(), "post:drinks".to_string()];
    /// assert!(Permission::new(Permission::POST_DRINKS).is_granted_by(&held));
    /// assert!(!Permission::new(Permission::PATCH_DRINKS).is_granted_by(&held));
    /// ```
    pub fn is_granted_by<S: AsRef<str>>(&self, held: &[S]) -> bool {
        held.iter().any(|p| p.as_ref() == self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_完全一致した場合のみ許可される() {
        let sut = Permission::new(Permission::PATCH_DRINKS);

        assert!(sut.is_granted_by(&["patch:drinks"]));
        assert!(!sut.is_granted_by(&["patch:drink"]));
        assert!(!sut.is_granted_by(&["patch:*"]));
        assert!(!sut.is_granted_by::<&str>(&[]));
    }
}
