use crate::{
    domain::{requests::auth::LoginRequest, response::session::SessionResponse},
    middleware::{
        session::{CurrentSession, SESSION_COOKIE},
        validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::json;
use shared::{
    access::LOGIN_ROUTE,
    domain::{UserSession, responses::ApiResponse},
    errors::HttpError,
    utils::SessionEvent,
};
use std::sync::Arc;
use tracing::{info, warn};
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session created", body = ApiResponse<SessionResponse>),
        (status = 400, description = "Malformed request"),
        (status = 401, description = "Invalid or expired access token")
    ),
    tag = "Auth"
)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentSession>,
    jar: CookieJar,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let claims = state
        .jwt_config
        .verify_token(&body.access_token, "access")
        .inspect_err(|e| {
            warn!("Login rejected: {}", e);
            state.metrics.record_session(SessionEvent::Rejected);
        })?;

    let session = UserSession::try_from(claims)?;

    if let Some(previous) = current.session_id.as_deref() {
        state.sessions.delete_session(previous).await;
    }

    let session_id = Uuid::new_v4().to_string();
    let session = state
        .sessions
        .create_session(&session_id, session, state.session_ttl)
        .await;

    state.metrics.record_session(SessionEvent::Created);
    info!(
        user_id = session.user_id(),
        role = %session.role(),
        "Session created"
    );

    let cookie = Cookie::build((SESSION_COOKIE, session_id.clone()))
        .path("/")
        .http_only(true)
        .secure(state.cookie_secure)
        .same_site(SameSite::Lax);

    let response = ApiResponse::success(
        "Login successful",
        SessionResponse {
            session_id,
            session: session.as_ref().clone(),
        },
    );

    Ok((StatusCode::OK, jar.add(cookie), Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cleared")
    ),
    security(("session_cookie" = [])),
    tag = "Auth"
)]
pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentSession>,
    jar: CookieJar,
) -> impl IntoResponse {
    let jar = end_session(&state, &current, jar).await;

    (
        jar,
        Json(json!({
            "status": "success",
            "message": "Logged out"
        })),
    )
}

pub async fn logout_page(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentSession>,
    jar: CookieJar,
) -> impl IntoResponse {
    let jar = end_session(&state, &current, jar).await;
    (jar, Redirect::to(LOGIN_ROUTE))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current session", body = ApiResponse<UserSession>),
        (status = 401, description = "Not logged in")
    ),
    security(("session_cookie" = [])),
    tag = "Auth"
)]
pub async fn me_handler(
    Extension(current): Extension<CurrentSession>,
) -> Result<impl IntoResponse, HttpError> {
    let session = current.require()?;

    Ok(Json(ApiResponse::success(
        "Current session",
        session.as_ref().clone(),
    )))
}

async fn end_session(state: &AppState, current: &CurrentSession, jar: CookieJar) -> CookieJar {
    if let Some(session_id) = current.session_id.as_deref() {
        if state.sessions.delete_session(session_id).await {
            state.metrics.record_session(SessionEvent::Deleted);
            info!(
                user_id = current.session.as_ref().map(|s| s.user_id()),
                "Session ended"
            );
        }
    }

    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

pub fn auth_routes() -> OpenApiRouter<Arc<AppState>> {
    OpenApiRouter::new()
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route("/api/auth/me", get(me_handler))
        .route("/logout", get(logout_page))
}
