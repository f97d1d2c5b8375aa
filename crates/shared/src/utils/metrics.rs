use prometheus_client::{
    encoding::{EncodeLabelSet, EncodeLabelValue},
    metrics::{
        counter::Counter,
        family::Family,
        histogram::{Histogram, exponential_buckets},
    },
    registry::Registry,
};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Other,
}

impl From<&axum::http::Method> for Method {
    fn from(method: &axum::http::Method) -> Self {
        match *method {
            axum::http::Method::GET => Method::Get,
            axum::http::Method::POST => Method::Post,
            axum::http::Method::PUT => Method::Put,
            axum::http::Method::DELETE => Method::Delete,
            _ => Method::Other,
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
struct RouteLabels {
    route: String,
    method: Method,
    status: Status,
}

fn duration_histogram() -> Histogram {
    Histogram::new(exponential_buckets(0.001, 2.0, 14))
}

/// Per-route call counter and latency histogram.
#[derive(Clone, Debug)]
pub struct Metrics {
    requests: Family<RouteLabels, Counter>,
    duration: Family<RouteLabels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            requests: Family::default(),
            duration: Family::new_with_constructor(duration_histogram as fn() -> Histogram),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "crm_http_requests",
            "HTTP requests by route and outcome",
            self.requests.clone(),
        );
        registry.register(
            "crm_http_request_duration_seconds",
            "HTTP request latency by route",
            self.duration.clone(),
        );
    }

    pub fn record(&self, route: &str, method: Method, status: Status, elapsed_secs: f64) {
        let labels = RouteLabels {
            route: route.to_string(),
            method,
            status,
        };

        self.requests.get_or_create(&labels).inc();
        self.duration.get_or_create(&labels).observe(elapsed_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;

    #[test]
    fn recorded_operations_show_up_in_exposition() {
        let metrics = Metrics::new();
        let mut registry = Registry::default();
        metrics.register(&mut registry);

        metrics.record(
            "/api/sellers/analytics/most-productive-time/{seller_id}/{days}",
            Method::Get,
            Status::Success,
            0.002,
        );

        let mut body = String::new();
        encode(&mut body, &registry).unwrap();

        assert!(body.contains("crm_http_requests_total"));
        assert!(body.contains(
            "route=\"/api/sellers/analytics/most-productive-time/{seller_id}/{days}\""
        ));
        assert!(body.contains("status=\"Success\""));
    }
}
