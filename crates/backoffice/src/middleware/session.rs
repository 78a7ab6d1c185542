use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{
    domain::UserSession,
    errors::{HttpError, ServiceError},
};
use std::sync::Arc;
use tracing::debug;

pub const SESSION_COOKIE: &str = "sid";

#[derive(Debug, Clone, Default)]
pub struct CurrentSession {
    pub session_id: Option<String>,
    pub session: Option<Arc<UserSession>>,
}

impl CurrentSession {
    pub fn require(&self) -> Result<&Arc<UserSession>, HttpError> {
        self.session
            .as_ref()
            .ok_or_else(|| ServiceError::SessionNotFound.into())
    }
}

pub async fn session_middleware(
    State(state): State<Arc<AppState>>,
    cookie_jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let cookie_id = cookie_jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string());
    let bearer_id = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_value| auth_value.strip_prefix("Bearer "))
        .map(str::to_owned);

    let mut current = CurrentSession::default();

    for id in [cookie_id, bearer_id].into_iter().flatten() {
        if id.is_empty() {
            continue;
        }

        if let Some(session) = state.sessions.get_session(&id).await {
            state.sessions.refresh_session(&id, state.session_ttl).await;
            current = CurrentSession {
                session_id: Some(id),
                session: Some(session),
            };
            break;
        }

        debug!("Unknown or expired session id presented");
        current.session_id.get_or_insert(id);
    }

    req.extensions_mut().insert(current);

    next.run(req).await
}
