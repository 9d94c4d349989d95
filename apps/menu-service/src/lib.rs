//! # Menu Service ライブラリ
//!
//! コーヒーショップのメニュー API のコアモジュール。
//!
//! ## モジュール構成
//!
//! - `auth`: Bearer トークンの取り出しとクレームの検証
//! - `handler`: HTTP ハンドラ
//! - `middleware`: 権限チェックミドルウェア
//! - `usecase`: ドリンク操作のユースケース

pub mod app_builder;
pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod usecase;
