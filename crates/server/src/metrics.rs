//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the donut shop:
//! - HTTP request metrics (latency, counts)
//! - Order and donut submission counters
//! - Kitchen stage counts (collected dynamically on scrape)

use once_cell::sync::Lazy;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, IntGaugeVec, Opts,
    Registry, TextEncoder,
};
use regex_lite::Regex;
use std::time::Duration;
use tracing::error;

use kitchen_core::Stage;

use crate::state::AppState;

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
            "donut_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("donut_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "donut_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

// =============================================================================
// Order Metrics
// =============================================================================

/// Orders placed total.
pub static ORDERS_PLACED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("donut_orders_placed_total", "Total orders placed since startup").unwrap()
});

/// Donuts submitted to the kitchen total.
pub static DONUTS_SUBMITTED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "donut_donuts_submitted_total",
        "Total donuts submitted to the kitchen since startup",
    )
    .unwrap()
});

// =============================================================================
// Kitchen Metrics (collected dynamically)
// =============================================================================

/// Donuts by current stage.
pub static DONUTS_BY_STAGE: Lazy<IntGaugeVec> = Lazy::new(|| {
    IntGaugeVec::new(
        Opts::new("donut_donuts_by_stage", "Current donut count by stage"),
        &["stage"],
    )
    .unwrap()
});

/// Fryer running state (1 = running, 0 = stopped).
pub static FRYER_RUNNING: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "donut_fryer_running",
        "Whether the fryer worker is running (1) or stopped (0)",
    )
    .unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    // HTTP
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();

    // Orders
    registry
        .register(Box::new(ORDERS_PLACED_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(DONUTS_SUBMITTED_TOTAL.clone()))
        .unwrap();

    // Kitchen
    registry.register(Box::new(DONUTS_BY_STAGE.clone())).unwrap();
    registry.register(Box::new(FRYER_RUNNING.clone())).unwrap();
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        error!("Failed to encode metrics: {}", e);
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Collect dynamic metrics from current application state.
///
/// Called before encoding so the kitchen gauges reflect the latest snapshot.
pub async fn collect_dynamic_metrics(state: &AppState) {
    let status = state.kitchen().status().await;
    FRYER_RUNNING.set(i64::from(status.running));
    for stage in Stage::ALL {
        DONUTS_BY_STAGE
            .with_label_values(&[stage.as_str()])
            .set(status.count(stage) as i64);
    }
}

/// Record one finished HTTP request.
pub fn observe_request(method: &str, path: &str, status: u16, elapsed: Duration) {
    let status = status.to_string();
    let labels = [method, path, status.as_str()];
    HTTP_REQUEST_DURATION
        .with_label_values(&labels)
        .observe(elapsed.as_secs_f64());
    HTTP_REQUESTS_TOTAL.with_label_values(&labels).inc();
}

static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}")
        .unwrap()
});

/// Normalize a path for metric labels (order ids become `{id}`).
pub fn normalize_path(path: &str) -> String {
    let path = match path.strip_prefix("/api/v1/orders/") {
        Some(rest) if !rest.is_empty() && !rest.contains('/') => {
            return "/api/v1/orders/{id}".to_string();
        }
        _ => path,
    };
    UUID_RE.replace_all(path, "{id}").into_owned()
}
