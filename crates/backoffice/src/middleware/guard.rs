use crate::{middleware::session::CurrentSession, state::AppState};
use axum::{
    Extension,
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use shared::{access::evaluate_route, errors::HttpError};
use std::sync::Arc;
use tracing::{debug, warn};

pub async fn route_guard(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentSession>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, HttpError> {
    let path = req.uri().path().to_owned();

    let route = state
        .routes
        .find(&path)
        .ok_or_else(|| HttpError::NotFound(format!("Page not found: {path}")))?;

    let decision = evaluate_route(current.session.as_deref(), &route.requirement);
    state.metrics.record_guard(decision);

    match decision.redirect_target() {
        None => {
            debug!(path = %path, "Route authorized");
            Ok(next.run(req).await)
        }
        Some(target) => {
            warn!(
                path = %path,
                user_id = current.session.as_ref().map(|s| s.user_id()),
                state = ?decision,
                "Route guard redirect to {}",
                target
            );
            Ok(Redirect::to(target).into_response())
        }
    }
}
