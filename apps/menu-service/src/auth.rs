//! # Bearer トークン認証
//!
//! `Authorization` ヘッダーからトークンを取り出し、外部の認可サーバーが
//! 署名したクレームを検証する。
//!
//! ## エラー一覧
//!
//! | 状況 | ステータス | code |
//! |------|-----------|------|
//! | ヘッダーなし | 401 | `authorization_header_missing` |
//! | `Bearer` 以外のスキーム / トークンなし / 3 要素以上 | 401 | `invalid_header` |
//! | 有効期限切れ | 401 | `token_expired` |
//! | audience / issuer 不一致 | 401 | `invalid_claims` |
//! | その他の解析失敗 | 400 | `invalid_header` |
//! | `permissions` クレームなし | 400 | `invalid_claims` |
//! | 権限不足 | 403 | `unauthorized` |
//!
//! 署名検証そのものは `jsonwebtoken` に委ね、[`ClaimsVerifier`] トレイトの
//! 背後に置く。テストではスタブ実装に差し替える。

use axum::{
    Json,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, errors::ErrorKind};
use quizcafe_shared::ErrorResponse;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 認証・認可エラー
///
/// `description` はそのままレスポンスの `message` になる。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {description}")]
pub struct AuthError {
    pub status:      StatusCode,
    pub code:        &'static str,
    pub description: &'static str,
}

impl AuthError {
    const fn new(status: StatusCode, code: &'static str, description: &'static str) -> Self {
        Self {
            status,
            code,
            description,
        }
    }

    pub const fn header_missing() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "authorization_header_missing",
            "Authorization header is expected.",
        )
    }

    pub const fn not_bearer() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "invalid_header",
            "Authorization header must start with \"Bearer\".",
        )
    }

    pub const fn token_not_found() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "invalid_header", "Token not found.")
    }

    pub const fn too_many_parts() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "invalid_header",
            "Authorization header must be bearer token.",
        )
    }

    pub const fn token_expired() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "token_expired", "Token expired.")
    }

    pub const fn incorrect_claims() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "invalid_claims",
            "Incorrect claims. Please, check the audience and issuer.",
        )
    }

    pub const fn unparseable() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "invalid_header",
            "Unable to parse authentication token.",
        )
    }

    pub const fn permissions_missing() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "invalid_claims",
            "Permissions not included in JWT.",
        )
    }

    pub const fn permission_denied() -> Self {
        Self::new(StatusCode::FORBIDDEN, "unauthorized", "Permission not found.")
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::info!(code = self.code, status = %self.status, "認証エラー: {}", self.description);
        (
            self.status,
            Json(ErrorResponse::new(self.status.as_u16(), self.description)),
        )
            .into_response()
    }
}

/// 検証済みのクレーム
///
/// 権限チェック後、リクエストの extensions に格納される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub:         Option<String>,
    /// 付与された権限（クレーム自体がない場合は `None`）
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

impl Claims {
    /// 監査ログに記録する操作者（`sub` がない場合は `-`）
    pub fn actor(&self) -> &str {
        self.sub.as_deref().unwrap_or("-")
    }
}

/// トークンを検証してクレームを返す
pub trait ClaimsVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Claims, AuthError>;
}

/// `Authorization: Bearer <token>` からトークン部分を取り出す
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(AuthError::header_missing)?
        .to_str()
        .map_err(|_| AuthError::not_bearer())?;

    let parts: Vec<&str> = value.split_whitespace().collect();
    match parts.as_slice() {
        [scheme, ..] if !scheme.eq_ignore_ascii_case("bearer") => Err(AuthError::not_bearer()),
        [] => Err(AuthError::not_bearer()),
        [_] => Err(AuthError::token_not_found()),
        [_, token] => Ok(*token),
        _ => Err(AuthError::too_many_parts()),
    }
}

/// 署名検証鍵
#[derive(Clone)]
pub enum JwtKey {
    /// RS256 の公開鍵（PEM）
    RsaPublicPem(String),
    /// HS256 の共有シークレット
    Secret(String),
}

impl std::fmt::Debug for JwtKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RsaPublicPem(_) => f.write_str("RsaPublicPem(..)"),
            Self::Secret(_) => f.write_str("Secret(..)"),
        }
    }
}

/// `jsonwebtoken` による [`ClaimsVerifier`] 実装
pub struct JwtClaimsVerifier {
    key:        DecodingKey,
    validation: Validation,
}

impl JwtClaimsVerifier {
    /// 鍵と、検証する audience / issuer から作成する
    ///
    /// audience / issuer が `None` の場合、その項目は検証しない。
    pub fn new(
        key: &JwtKey,
        audience: Option<&str>,
        issuer: Option<&str>,
    ) -> Result<Self, jsonwebtoken::errors::Error> {
        let (key, algorithm) = match key {
            JwtKey::RsaPublicPem(pem) => (DecodingKey::from_rsa_pem(pem.as_bytes())?, Algorithm::RS256),
            JwtKey::Secret(secret) => (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256),
        };

        let mut validation = Validation::new(algorithm);
        match audience {
            Some(aud) => validation.set_audience(&[aud]),
            None => validation.validate_aud = false,
        }
        if let Some(iss) = issuer {
            validation.set_issuer(&[iss]);
        }

        Ok(Self { key, validation })
    }
}

impl ClaimsVerifier for JwtClaimsVerifier {
    fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "トークンの検証に失敗しました");
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::token_expired(),
                    ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => {
                        AuthError::incorrect_claims()
                    }
                    _ => AuthError::unparseable(),
                }
            })
    }
}
