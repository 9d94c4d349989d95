//! # Menu Service アプリケーション構築
//!
//! ユースケース → State → Router の順に組み立て、
//! 権限が必要なルートには権限ごとに認可ミドルウェアを付与する。

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post},
};
use quizcafe_domain::permission::Permission;
use quizcafe_infra::repository::DrinkRepository;
use quizcafe_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    auth::ClaimsVerifier,
    handler::{
        DrinkState,
        create_drink,
        delete_drink,
        health_check,
        list_drinks_detailed,
        list_drinks_public,
        method_not_allowed_fallback,
        not_found_fallback,
        update_drink,
    },
    middleware::{AuthzState, require_permission},
    usecase::DrinkUseCaseImpl,
};

/// ルーターを構築する
pub fn build_router(
    drink_repository: Arc<dyn DrinkRepository>,
    verifier: Arc<dyn ClaimsVerifier>,
) -> Router {
    let drink_state = Arc::new(DrinkState {
        usecase: DrinkUseCaseImpl::new(drink_repository),
    });

    let authz = |permission: &str| AuthzState {
        verifier:            verifier.clone(),
        required_permission: Permission::new(permission),
    };

    Router::new()
        .route("/health", get(health_check))
        // 公開 API
        .merge(
            Router::new()
                .route("/drinks", get(list_drinks_public))
                .with_state(drink_state.clone()),
        )
        .merge(
            Router::new()
                .route("/drinks-detail", get(list_drinks_detailed))
                .layer(from_fn_with_state(
                    authz(Permission::GET_DRINKS_DETAIL),
                    require_permission,
                ))
                .with_state(drink_state.clone()),
        )
        .merge(
            Router::new()
                .route("/drinks", post(create_drink))
                .layer(from_fn_with_state(
                    authz(Permission::POST_DRINKS),
                    require_permission,
                ))
                .with_state(drink_state.clone()),
        )
        .merge(
            Router::new()
                .route("/drinks/{id}", patch(update_drink))
                .layer(from_fn_with_state(
                    authz(Permission::PATCH_DRINKS),
                    require_permission,
                ))
                .with_state(drink_state.clone()),
        )
        .merge(
            Router::new()
                .route("/drinks/{id}", delete(delete_drink))
                .layer(from_fn_with_state(
                    authz(Permission::DELETE_DRINKS),
                    require_permission,
                ))
                .with_state(drink_state),
        )
        .fallback(not_found_fallback)
        .method_not_allowed_fallback(method_not_allowed_fallback)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
