use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};


lazy_static! {
    pub static ref ASK_REQUESTS_TOTAL: Counter =
        register_counter!("infoseeker_ask_requests_total", "Total number of ask requests").unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter =
        register_counter!("infoseeker_rate_limited_total", "Requests rejected by the rate limiter").unwrap();
    pub static ref UPSTREAM_ERRORS_TOTAL: Counter =
        register_counter!("infoseeker_upstream_errors_total", "Failed chat completion calls").unwrap();
    pub static ref UPSTREAM_LATENCY: Histogram = register_histogram!(
        "infoseeker_upstream_latency_seconds",
        "Chat completion latency in seconds"
    )
    .unwrap();
    pub static ref RATE_LIMIT_TRACKED_CLIENTS: Gauge =
        register_gauge!("infoseeker_rate_limit_tracked_clients", "Clients currently held by the rate limiter").unwrap();
}
