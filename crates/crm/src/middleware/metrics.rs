use crate::state::AppState;
use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use shared::utils::{Method, Status};
use std::{sync::Arc, time::Instant};

const UNMATCHED_ROUTE: &str = "unmatched";

/// Route template of the request. Paths no route matched share one label so
/// arbitrary URLs cannot grow the series set.
fn route_label(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned())
}

/// Counts every routed request and observes its latency under the matched
/// route template, so `/api/sellers/1` and `/api/sellers/2` share a series.
pub async fn track_metrics(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let route = route_label(&req);
    let method = Method::from(req.method());

    let response = next.run(req).await;

    let status = if response.status().is_client_error() || response.status().is_server_error() {
        Status::Error
    } else {
        Status::Success
    };

    state
        .metrics
        .record(&route, method, status, started.elapsed().as_secs_f64());

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn unrouted_paths_share_one_label() {
        let first = Request::builder()
            .uri("/api/no-such-thing/1")
            .body(Body::empty())
            .unwrap();
        let second = Request::builder()
            .uri("/wp-admin/setup.php")
            .body(Body::empty())
            .unwrap();

        assert_eq!(route_label(&first), UNMATCHED_ROUTE);
        assert_eq!(route_label(&second), UNMATCHED_ROUTE);
    }
}
