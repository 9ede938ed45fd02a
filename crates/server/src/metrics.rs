//! Prometheus metrics for observability.
//!
//! HTTP request metrics live here; engine counters come from
//! `lotto_core::metrics` and are registered into the same registry.

use once_cell::sync::Lazy;
use prometheus::{self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use regex_lite::Regex;
use tracing::error;

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "lotto_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
        ]),
        &["method", "path", "status"],
    )
    .expect("static histogram definition is valid")
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("lotto_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .expect("static counter definition is valid")
});

static NUMERIC_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/-?\d+(/|$)").expect("static regex is valid"));

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    let collectors: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(HTTP_REQUEST_DURATION.clone()),
        Box::new(HTTP_REQUESTS_TOTAL.clone()),
    ];

    // Core metrics (registration, random generation)
    for metric in collectors.into_iter().chain(lotto_core::metrics::all_metrics()) {
        if let Err(e) = registry.register(metric) {
            error!("Failed to register metric: {}", e);
        }
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

/// Collapse numeric path segments (round ids) so label cardinality stays bounded.
pub fn normalize_path(path: &str) -> String {
    NUMERIC_SEGMENT.replace_all(path, "/{id}$1").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_round_id() {
        assert_eq!(
            normalize_path("/api/v1/rounds/12345/tickets"),
            "/api/v1/rounds/{id}/tickets"
        );
    }

    #[test]
    fn test_normalize_path_negative_round_id() {
        assert_eq!(
            normalize_path("/api/v1/rounds/-3/random-numbers"),
            "/api/v1/rounds/{id}/random-numbers"
        );
    }

    #[test]
    fn test_normalize_path_trailing_id() {
        assert_eq!(normalize_path("/api/v1/rounds/7"), "/api/v1/rounds/{id}");
    }

    #[test]
    fn test_normalize_path_unchanged() {
        assert_eq!(normalize_path("/api/v1/health"), "/api/v1/health");
    }

    #[test]
    fn test_encode_metrics_returns_prometheus_format() {
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["GET", "/api/v1/health", "200"])
            .inc();
        lotto_core::metrics::RANDOM_DRAWS.inc();

        let output = encode_metrics().unwrap();
        assert!(output.contains("lotto_http_requests_total"));
        assert!(output.contains("lotto_random_draws_total"));
    }
}
