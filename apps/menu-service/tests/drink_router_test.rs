//! ドリンク API ルーターテスト
//!
//! `build_router` にモックリポジトリとスタブ検証器を渡し、
//! 権限ごとのアクセス制御とレスポンス形状を検証する。
//!
//! ## スタブ検証器のトークン
//!
//! | トークン | クレーム |
//! |---------|---------|
//! | `manager` | 全権限 |
//! | `barista` | `get:drinks-detail` のみ |
//! | `no-permissions` | `permissions` クレームなし |
//! | `expired` | 期限切れエラー |

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use pretty_assertions::assert_eq;
use quizcafe_domain::drink::{Drink, DrinkId, Ingredient, Recipe};
use quizcafe_infra::mock::MockDrinkRepository;
use quizcafe_menu_service::{
    app_builder::build_router,
    auth::{AuthError, Claims, ClaimsVerifier},
};
use serde_json::{Value as JsonValue, json};
use tower::ServiceExt;

// --- テストヘルパー ---

struct StubVerifier;

impl ClaimsVerifier for StubVerifier {
    fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let permissions = match token {
            "manager" => vec![
                "get:drinks-detail",
                "post:drinks",
                "patch:drinks",
                "delete:drinks",
            ],
            "barista" => vec!["get:drinks-detail"],
            "no-permissions" => {
                return Ok(Claims {
                    sub:         Some("auth0|nobody".to_string()),
                    permissions: None,
                });
            }
            "expired" => return Err(AuthError::token_expired()),
            _ => return Err(AuthError::unparseable()),
        };
        Ok(Claims {
            sub:         Some(format!("auth0|{token}")),
            permissions: Some(permissions.into_iter().map(str::to_string).collect()),
        })
    }
}

fn water() -> Drink {
    Drink::from_db(
        DrinkId::new(1),
        "Water".to_string(),
        Recipe::new(vec![Ingredient {
            name:  "Water".to_string(),
            color: "blue".to_string(),
            parts: 1,
        }]),
    )
}

fn create_test_app() -> (Router, MockDrinkRepository) {
    let repo = MockDrinkRepository::new();
    repo.add_drink(water());
    let app = build_router(Arc::new(repo.clone()), Arc::new(StubVerifier));
    (app, repo)
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<JsonValue>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, JsonValue) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

// --- 公開 API ---

#[tokio::test]
async fn test_ドリンク一覧は認証なしでshort表現を返す() {
    let (app, _) = create_test_app();

    let (status, body) = send(&app, request(Method::GET, "/drinks", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "drinks": [{"id": 1, "title": "Water", "recipe": [{"color": "blue", "parts": 1}]}]
        })
    );
}

// --- 認証・認可 ---

#[tokio::test]
async fn test_詳細一覧は権限があればlong表現を返す() {
    let (app, _) = create_test_app();

    let (status, body) = send(&app, request(Method::GET, "/drinks-detail", Some("barista"), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["drinks"][0]["recipe"],
        json!([{"name": "Water", "color": "blue", "parts": 1}])
    );
}

#[tokio::test]
async fn test_詳細一覧はヘッダーなしで401() {
    let (app, _) = create_test_app();

    let (status, body) = send(&app, request(Method::GET, "/drinks-detail", None, None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": 401,
            "message": "Authorization header is expected."
        })
    );
}

#[tokio::test]
async fn test_permissionsクレームのないトークンは400() {
    let (app, _) = create_test_app();

    let (status, body) =
        send(&app, request(Method::GET, "/drinks-detail", Some("no-permissions"), None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Permissions not included in JWT.");
}

#[tokio::test]
async fn test_期限切れトークンは401() {
    let (app, _) = create_test_app();

    let (status, body) = send(&app, request(Method::GET, "/drinks-detail", Some("expired"), None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token expired.");
}

#[tokio::test]
async fn test_patch権限のないユーザーの更新は403で内容は変わらない() {
    // Given
    let (app, repo) = create_test_app();

    // When
    let (status, body) = send(
        &app,
        request(
            Method::PATCH,
            "/drinks/1",
            Some("barista"),
            Some(json!({"title": "Sparkling Water"})),
        ),
    )
    .await;

    // Then
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body,
        json!({"success": false, "error": 403, "message": "Permission not found."})
    );
    assert_eq!(repo.get(DrinkId::new(1)).unwrap().title(), "Water");
}

// --- 作成 ---

#[tokio::test]
async fn test_ドリンクを作成すると全件のlong表現を返す() {
    let (app, _) = create_test_app();

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/drinks",
            Some("manager"),
            Some(json!({
                "title": "Matcha Shake",
                "recipe": [
                    {"name": "Milk", "color": "grey", "parts": 1},
                    {"name": "Matcha", "color": "green", "parts": 3}
                ]
            })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["drinks"].as_array().unwrap().len(), 2);
    assert_eq!(
        body["drinks"][1],
        json!({
            "id": 2,
            "title": "Matcha Shake",
            "recipe": [
                {"name": "Milk", "color": "grey", "parts": 1},
                {"name": "Matcha", "color": "green", "parts": 3}
            ]
        })
    );
}

#[tokio::test]
async fn test_単一の材料オブジェクトのレシピは1要素のリストとして保存される() {
    let (app, repo) = create_test_app();

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/drinks",
            Some("manager"),
            Some(json!({
                "title": "Espresso",
                "recipe": {"name": "Coffee", "color": "brown", "parts": 1}
            })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(repo.get(DrinkId::new(2)).unwrap().recipe().ingredients().len(), 1);
}

#[tokio::test]
async fn test_タイトルが重複するドリンクの作成は400() {
    let (app, _) = create_test_app();

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/drinks",
            Some("manager"),
            Some(json!({"title": "Water", "recipe": []})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"success": false, "error": 400, "message": "bad request"})
    );
}

#[tokio::test]
async fn test_レシピが欠けた作成リクエストは400() {
    let (app, _) = create_test_app();

    let (status, _) = send(
        &app,
        request(Method::POST, "/drinks", Some("manager"), Some(json!({"title": "Tea"}))),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// --- 更新 ---

#[tokio::test]
async fn test_更新は指定した項目のみ置き換える() {
    let (app, _) = create_test_app();

    let (status, body) = send(
        &app,
        request(
            Method::PATCH,
            "/drinks/1",
            Some("manager"),
            Some(json!({"title": "Still Water"})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["drinks"][0],
        json!({
            "id": 1,
            "title": "Still Water",
            "recipe": [{"name": "Water", "color": "blue", "parts": 1}]
        })
    );
}

#[tokio::test]
async fn test_存在しないドリンクの更新は404() {
    let (app, _) = create_test_app();

    let (status, _) = send(
        &app,
        request(
            Method::PATCH,
            "/drinks/99",
            Some("manager"),
            Some(json!({"title": "Ghost"})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// --- 削除 ---

#[tokio::test]
async fn test_同じドリンクを2回削除すると2回目は404() {
    let (app, repo) = create_test_app();

    let (status, body) = send(&app, request(Method::DELETE, "/drinks/1", Some("manager"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "delete": 1}));
    assert!(repo.get(DrinkId::new(1)).is_none());

    let (status, body) = send(&app, request(Method::DELETE, "/drinks/1", Some("manager"), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "resource not found");
}

// --- その他 ---

#[tokio::test]
async fn test_未対応メソッドは405() {
    let (app, _) = create_test_app();

    let (status, body) = send(&app, request(Method::PUT, "/drinks", None, None)).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["message"], "method not allowed");
}

#[tokio::test]
async fn test_未登録のルートは404() {
    let (app, _) = create_test_app();

    let (status, body) = send(&app, request(Method::GET, "/menu", None, None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}
