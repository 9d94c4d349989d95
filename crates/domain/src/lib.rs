//! # QuizCafe ドメイン層
//!
//! トリビア API とメニュー API が共有するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: DB の連番 ID を持つオブジェクト（Question, Category, Drink）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（Page, Recipe, Permission）
//! - **ドメインエラー**: 入力がビジネスルールに違反したことを表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! apps → infra → domain
//!    ↘          ↗
//!      shared
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`category`] - 問題カテゴリ
//! - [`question`] - トリビア問題とページング
//! - [`quiz`] - クイズの出題範囲と次問題の選択
//! - [`drink`] - ドリンクとレシピ
//! - [`permission`] - メニュー API の権限
//! - [`error`] - ドメイン層エラー

#[macro_use]
mod macros;

pub mod category;
pub mod drink;
pub mod error;
pub mod permission;
pub mod question;
pub mod quiz;

pub use error::DomainError;
