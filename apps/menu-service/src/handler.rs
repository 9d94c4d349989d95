//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//! 権限チェックはルート登録時にミドルウェアとして付与するため、
//! ハンドラ自体は認可を意識しない。

pub mod drink;
pub mod health;

pub use drink::{
    DrinkState,
    create_drink,
    delete_drink,
    list_drinks_detailed,
    list_drinks_public,
    update_drink,
};
pub use health::health_check;

use crate::error::MenuError;

/// 未登録ルートのフォールバック
pub async fn not_found_fallback() -> MenuError {
    MenuError::NotFound("ルートが存在しません".to_string())
}

/// 登録済みルートで未対応メソッドが呼ばれた場合のフォールバック
pub async fn method_not_allowed_fallback() -> MenuError {
    MenuError::MethodNotAllowed
}
