//! Router assembly and request logging.

use crate::api::{health, resource_routes, unknown_route};
use crate::state::AppState;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use log::{info, warn};
use std::time::Instant;
use workboard_core::{Bid, Person, WorkOrder};

/// Builds the full HTTP surface over `state`.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new().route("/health", get(health));
    let router = resource_routes::<Person>(router);
    let router = resource_routes::<WorkOrder>(router);
    let router = resource_routes::<Bid>(router);

    router
        .fallback(unknown_route)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    if status.is_server_error() {
        warn!(
            "event=http_request module=http status={} method={} path={} duration_ms={}",
            status.as_u16(),
            method,
            path,
            started_at.elapsed().as_millis()
        );
    } else {
        info!(
            "event=http_request module=http status={} method={} path={} duration_ms={}",
            status.as_u16(),
            method,
            path,
            started_at.elapsed().as_millis()
        );
    }
    response
}
