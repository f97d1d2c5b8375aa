use crate::di::DependenciesInject;
use prometheus_client::registry::Registry;
use shared::{config::ConnectionPool, utils::Metrics};
use std::sync::Arc;

pub struct AppState {
    pub di_container: DependenciesInject,
    pub metrics: Metrics,
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(db: ConnectionPool) -> Self {
        let metrics = Metrics::new();
        let mut registry = Registry::default();
        metrics.register(&mut registry);

        Self {
            di_container: DependenciesInject::new(db),
            metrics,
            registry: Arc::new(registry),
        }
    }
}
