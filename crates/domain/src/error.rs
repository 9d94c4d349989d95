//! # ドメイン層エラー定義
//!
//! ビジネスルール違反を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 必須項目の欠落、不正なページ番号 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |
//!
//! ## 使用例
//!
//! ```rust
//! use quizcafe_domain::DomainError;
//!
//! fn require_title(title: Option<String>) -> Result<String, DomainError> {
//!     title.ok_or_else(|| DomainError::Validation("title は必須です".to_string()))
//! }
//!
//! assert!(require_title(None).is_err());
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、各サービスのエラーエンベロープに変換する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 必須フィールドの欠落や範囲外の値など、入力がルールに違反している場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// エンティティが見つからない
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"Question", "Drink" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },
}
