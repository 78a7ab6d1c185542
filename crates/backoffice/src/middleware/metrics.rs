use crate::state::AppState;
use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use shared::utils::{Method, Status};
use std::sync::Arc;
use tokio::time::Instant;

pub async fn track_metrics(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let method = match req.method().as_str() {
        "GET" => Method::Get,
        "POST" => Method::Post,
        "PUT" => Method::Put,
        "DELETE" => Method::Delete,
        _ => Method::Other,
    };

    let start = Instant::now();
    let response = next.run(req).await;

    state.metrics.record(
        method,
        Status::from_code(response.status().as_u16()),
        start.elapsed().as_secs_f64(),
    );

    response
}
