//! # Trivia Service ライブラリ
//!
//! トリビア API のハンドラ、ユースケース、ルーター構築を公開する。
//! `main.rs` とルーターテスト（`tests/`）の両方から利用する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
