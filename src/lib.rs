pub mod client_id;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod openai;
pub mod prompt;
pub mod rate_limit;
pub mod routes;
pub mod state;
