use axum::http::header::{COOKIE, CONTENT_TYPE};
use axum::http::{self};
use axum::routing::{delete, get, post, put};
use axum::{Router, middleware};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use uuid::Uuid;

use crate::adapter::http::docs::{docs_ui, openapi_json};
use crate::adapter::http::middleware::auth::auth_middleware;
use crate::adapter::http::routes::profile::{
    add_education, add_experience, delete_account, get_own_profile, get_profile_by_user, get_profiles,
    remove_education, remove_experience, upsert_profile,
};
use crate::infra::config::AppConfig;
use crate::infra::state::AppState;

fn build_cors(config: &AppConfig) -> CorsLayer {
    let has_wildcard = config.application.allow_origins.iter().any(|s| s == "*");

    if has_wildcard {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                http::Method::POST,
                http::Method::GET,
                http::Method::PUT,
                http::Method::DELETE,
            ])
            .allow_headers([CONTENT_TYPE, COOKIE]);
    }
    let origins: Vec<http::HeaderValue> = config
        .application
        .allow_origins
        .iter()
        .filter_map(|s| {
            s.parse::<http::HeaderValue>()
                .map_err(|e| {
                    tracing::warn!("Failed to parse origin '{}': {}", s, e);
                })
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            http::Method::POST,
            http::Method::GET,
            http::Method::PUT,
            http::Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE, COOKIE])
        .allow_credentials(true)
}

pub fn profile_router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new()
        .route("/", get(get_profiles))
        .route("/user/{user_id}", get(get_profile_by_user));

    let protected_routes = Router::new()
        .route("/me", get(get_own_profile))
        .route("/", post(upsert_profile).delete(delete_account))
        .route("/experience", put(add_experience))
        .route("/experience/{exp_id}", delete(remove_experience))
        .route("/education", put(add_education))
        .route("/education/{edu_id}", delete(remove_education))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/profile", profile_router(state.clone()))
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(docs_ui))
}

pub fn create_app(config: &AppConfig, state: AppState) -> Router {
    let cors = build_cors(config);
    Router::new()
        .merge(router(state.clone()))
        .with_state(state.clone())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &http::Request<_>| {
                    let request_id = Uuid::now_v7();
                    tracing::info_span!(
                        "http-request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                        request_id = %request_id
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
