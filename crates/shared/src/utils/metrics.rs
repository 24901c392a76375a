use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use std::{fmt::Display, future::Future, time::Instant};
use tracing::error;

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ])
            }),
        }
    }

    /// Registers both families under `prefix` (e.g. `product_query`).
    pub fn register(&self, registry: &mut Registry, prefix: &str) {
        let sub = registry.sub_registry_with_prefix(prefix);

        sub.register(
            "requests",
            "Number of service operations",
            self.request_counter.clone(),
        );

        sub.register(
            "request_duration_seconds",
            "Service operation latency in seconds",
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }

    pub fn record_result<T, E>(&self, method: Method, started: Instant, result: &Result<T, E>) {
        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.record(method, status, started.elapsed().as_secs_f64());
    }

    /// Awaits `fut`, records its outcome and latency, and logs failures.
    pub async fn observe<T, E, F>(&self, method: Method, operation: &str, fut: F) -> Result<T, E>
    where
        E: Display,
        F: Future<Output = Result<T, E>>,
    {
        let started = Instant::now();
        let result = fut.await;

        if let Err(e) = &result {
            error!("❌ {operation} failed: {e}");
        }

        self.record_result(method, started, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;

    #[test]
    fn records_are_exposed_under_prefix() {
        let mut registry = Registry::default();
        let metrics = Metrics::new();
        metrics.register(&mut registry, "product_query");

        let ok: Result<(), ()> = Ok(());
        metrics.record_result(Method::Get, Instant::now(), &ok);
        metrics.record(Method::Delete, Status::Error, 0.01);

        let mut buffer = String::new();
        encode(&mut buffer, &registry).unwrap();

        assert!(buffer.contains("product_query_requests_total"));
        assert!(buffer.contains("method=\"Get\",status=\"Success\""));
        assert!(buffer.contains("method=\"Delete\",status=\"Error\""));
    }

    #[tokio::test]
    async fn observe_passes_result_through() {
        let metrics = Metrics::new();

        let ok: Result<i32, String> = metrics.observe(Method::Post, "create", async { Ok(7) }).await;
        let err: Result<i32, String> = metrics
            .observe(Method::Put, "update", async { Err("boom".to_string()) })
            .await;

        assert_eq!(ok, Ok(7));
        assert_eq!(err, Err("boom".to_string()));

        let success = Labels { method: Method::Post, status: Status::Success };
        let failure = Labels { method: Method::Put, status: Status::Error };
        assert_eq!(metrics.request_counter.get_or_create(&success).get(), 1);
        assert_eq!(metrics.request_counter.get_or_create(&failure).get(), 1);
    }
}
