use crate::{di::DependenciesInject, repository::Repositories};
use prometheus_client::registry::Registry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(repos: Repositories) -> Self {
        let mut registry = Registry::default();
        let di_container = DependenciesInject::new(repos, &mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Repositories::in_memory())
    }
}
