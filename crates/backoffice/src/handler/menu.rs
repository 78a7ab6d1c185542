use crate::{
    domain::{requests::access::AccessCheckQuery, response::access::AccessDecisionResponse},
    middleware::session::CurrentSession,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use shared::{
    access::{evaluate_route, filter_menu_items},
    domain::{MenuEntry, responses::ApiResponse},
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/menu",
    responses(
        (status = 200, description = "Navigation entries visible to the caller", body = ApiResponse<Vec<MenuEntry>>),
        (status = 401, description = "Not logged in")
    ),
    security(("session_cookie" = [])),
    tag = "Navigation"
)]
pub async fn get_menu(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentSession>,
) -> Result<impl IntoResponse, HttpError> {
    let session = current.require()?;
    let items = filter_menu_items(&state.menu, session);

    Ok(Json(ApiResponse::success("Menu", items)))
}

#[utoipa::path(
    get,
    path = "/api/access/check",
    params(AccessCheckQuery),
    responses(
        (status = 200, description = "Guard decision for the page", body = ApiResponse<AccessDecisionResponse>),
        (status = 404, description = "Unknown page")
    ),
    tag = "Navigation"
)]
pub async fn check_access(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentSession>,
    Query(query): Query<AccessCheckQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let route = state
        .routes
        .find(&query.path)
        .ok_or_else(|| HttpError::NotFound(format!("Page not found: {}", query.path)))?;

    let decision = evaluate_route(current.session.as_deref(), &route.requirement);

    let response = AccessDecisionResponse {
        path: route.path.to_string(),
        state: decision,
        redirect: decision.redirect_target().map(str::to_string),
        permissions: route.requirement.permissions().to_vec(),
        require_all: route.requirement.require_all(),
    };

    Ok(Json(ApiResponse::success("Access decision", response)))
}

pub fn menu_routes() -> OpenApiRouter<Arc<AppState>> {
    OpenApiRouter::new()
        .route("/api/menu", get(get_menu))
        .route("/api/access/check", get(check_access))
}
