//! Metrics setup and update. All of the metrics are initialized during
//! adapter setup and can be updated throughout its lifetime.

use prometheus::{IntCounter, Registry};

/// The collection of all metrics the adapter tracks.
#[derive(Clone)]
pub struct Metrics {
    query_total: IntCounter,
    query_errors_total: IntCounter,
    mutation_total: IntCounter,
    mutation_errors_total: IntCounter,
}

impl Metrics {
    /// Set up counters and gauges used to produce Prometheus metrics.
    pub fn initialize(metrics_registry: &mut Registry) -> Result<Self, prometheus::Error> {
        let query_total = add_int_counter_metric(
            metrics_registry,
            "salesforce_adapter_query_total",
            "Total successful queries.",
        )?;

        let query_errors_total = add_int_counter_metric(
            metrics_registry,
            "salesforce_adapter_query_errors_total",
            "Total queries that failed.",
        )?;

        let mutation_total = add_int_counter_metric(
            metrics_registry,
            "salesforce_adapter_mutation_total",
            "Total successful mutation calls.",
        )?;

        let mutation_errors_total = add_int_counter_metric(
            metrics_registry,
            "salesforce_adapter_mutation_errors_total",
            "Total mutation calls that failed.",
        )?;

        Ok(Self {
            query_total,
            query_errors_total,
            mutation_total,
            mutation_errors_total,
        })
    }

    pub fn record_successful_query(&self) {
        self.query_total.inc();
    }

    pub fn record_failed_query(&self) {
        self.query_errors_total.inc();
    }

    pub fn record_successful_mutation(&self) {
        self.mutation_total.inc();
    }

    pub fn record_failed_mutation(&self) {
        self.mutation_errors_total.inc();
    }
}

/// Create a new int counter metric and register it with the provided
/// Prometheus Registry.
fn add_int_counter_metric(
    metrics_registry: &mut Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<IntCounter, prometheus::Error> {
    let int_counter = IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    register_collector(metrics_registry, int_counter)
}

/// Register a new collector with the registry, and return it for later use.
fn register_collector<Collector: prometheus::core::Collector + Clone + 'static>(
    metrics_registry: &mut Registry,
    collector: Collector,
) -> Result<Collector, prometheus::Error> {
    metrics_registry.register(Box::new(collector.clone()))?;
    Ok(collector)
}
