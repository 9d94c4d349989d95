//! # 認可ミドルウェア
//!
//! Bearer トークンのクレームを検証し、ルートごとに要求する権限を確認する。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! let authz_state = AuthzState {
//!     verifier:            verifier.clone(),
//!     required_permission: Permission::new(Permission::PATCH_DRINKS),
//! };
//!
//! Router::new()
//!     .route("/drinks/{id}", patch(update_drink))
//!     .layer(from_fn_with_state(authz_state, require_permission))
//! ```

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use quizcafe_domain::permission::Permission;

use crate::auth::{AuthError, ClaimsVerifier, extract_bearer_token};

/// 認可ミドルウェアの状態
#[derive(Clone)]
pub struct AuthzState {
    pub verifier:            Arc<dyn ClaimsVerifier>,
    pub required_permission: Permission,
}

/// 認可ミドルウェア
///
/// 1. `Authorization` ヘッダーから Bearer トークンを取り出す
/// 2. [`ClaimsVerifier`] でクレームを検証する
/// 3. `permissions` クレームに要求権限が含まれるか確認する
/// 4. クレームを extensions に格納してハンドラを呼ぶ
pub async fn require_permission(
    State(state): State<AuthzState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let claims = match authorize(&state, &request) {
        Ok(claims) => claims,
        Err(e) => return e.into_response(),
    };

    tracing::debug!(
        sub = claims.actor(),
        permission = %state.required_permission,
        "権限を確認しました"
    );
    request.extensions_mut().insert(claims);
    next.run(request).await
}

fn authorize(
    state: &AuthzState,
    request: &Request<Body>,
) -> Result<crate::auth::Claims, AuthError> {
    let token = extract_bearer_token(request.headers())?;
    let claims = state.verifier.verify(token)?;

    let permissions = claims
        .permissions
        .as_deref()
        .ok_or_else(AuthError::permissions_missing)?;
    if !state.required_permission.is_granted_by(permissions) {
        return Err(AuthError::permission_denied());
    }

    Ok(claims)
}
