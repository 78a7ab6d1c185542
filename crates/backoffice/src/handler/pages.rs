use crate::{
    domain::response::access::PageResponse, middleware::guard::route_guard, state::AppState,
};
use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri},
    middleware,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use shared::{
    access::{LOGIN_ROUTE, UNAUTHORIZED_ROUTE},
    domain::responses::ApiResponse,
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

pub async fn health_checker_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Back-office is running"
        })),
    )
}

pub async fn admin_page(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<impl IntoResponse, HttpError> {
    let route = state
        .routes
        .find(uri.path())
        .ok_or_else(|| HttpError::NotFound(format!("Page not found: {}", uri.path())))?;

    Ok(Json(ApiResponse::success(
        "Page",
        PageResponse {
            path: route.path.to_string(),
            title: route.title.to_string(),
        },
    )))
}

pub async fn login_page() -> impl IntoResponse {
    Json(json!({
        "status": "success",
        "message": "Please log in",
        "login": "/api/auth/login"
    }))
}

pub async fn unauthorized_page() -> impl IntoResponse {
    Json(json!({
        "status": "fail",
        "message": "You do not have permission to view this page"
    }))
}

pub fn page_routes(app_state: Arc<AppState>) -> OpenApiRouter<Arc<AppState>> {
    let guarded = OpenApiRouter::new()
        .route("/admin/{*page}", get(admin_page))
        .route_layer(middleware::from_fn_with_state(app_state, route_guard));

    OpenApiRouter::new()
        .route("/health", get(health_checker_handler))
        .route(LOGIN_ROUTE, get(login_page))
        .route(UNAUTHORIZED_ROUTE, get(unauthorized_page))
        .merge(guarded)
}
