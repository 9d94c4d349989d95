//! # ミドルウェア
//!
//! Menu Service 用のミドルウェアを提供する。

mod authz;

pub use authz::{AuthzState, require_permission};
