use std::time::Instant;

use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

/// One structured event per request.
///
/// Only the route and outcome are recorded; bodies carry patient names and
/// measurements and stay out of the log. Rejected submissions log at `warn`,
/// server failures at `error`.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let route = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    let elapsed_ms = started.elapsed().as_millis() as u64;
    record(&method, &route, response.status(), elapsed_ms);
    response
}

fn record(method: &Method, route: &str, status: StatusCode, elapsed_ms: u64) {
    let status = status.as_u16();
    if status >= 500 {
        tracing::error!(%method, route, status, elapsed_ms, "screening_request");
    } else if status >= 400 {
        tracing::warn!(%method, route, status, elapsed_ms, "screening_request");
    } else {
        tracing::info!(%method, route, status, elapsed_ms, "screening_request");
    }
}
