//! Metrics collection.
//!
//! # Metrics
//! - `wallet_gateway_operations_total` (counter): gateway operations by operation, outcome
//! - `wallet_gateway_operation_duration_seconds` (histogram): latency per operation
//! - `wallet_gateway_provider_requests_total` (counter): provider requests by method, outcome

use std::time::Instant;

/// Record one finished gateway operation.
pub fn record_operation(operation: &'static str, success: bool, start: Instant) {
    let outcome = if success { "ok" } else { "error" };
    metrics::counter!(
        "wallet_gateway_operations_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!(
        "wallet_gateway_operation_duration_seconds",
        "operation" => operation
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record one provider request.
pub fn record_provider_request(method: &str, success: bool) {
    let outcome = if success { "ok" } else { "error" };
    metrics::counter!(
        "wallet_gateway_provider_requests_total",
        "method" => method.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}
