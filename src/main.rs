use clap::Parser;
use infoseeker_gateway::config::Args;
use infoseeker_gateway::logging::init_tracing;
use infoseeker_gateway::openai::OpenAiClient;
use infoseeker_gateway::rate_limit::{AdmissionGate, FixedWindowLimiter, sweeper};
use infoseeker_gateway::routes::router;
use infoseeker_gateway::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // parse cli arguments
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    // the limiter lives as long as the process and is shared by every request
    let limiter = FixedWindowLimiter::new(args.rate_limit, args.rate_window());
    info!(
        rate_limit = limiter.max_requests(),
        rate_window_ms = limiter.window().as_millis() as u64,
        "rate limit configured"
    );
    let gate: Arc<dyn AdmissionGate> = Arc::new(limiter);

    if let Some(every) = args.sweep_interval() {
        tokio::spawn(sweeper(Arc::clone(&gate), every));
    }

    let api_key = args.api_key();
    if api_key.is_none() {
        warn!("OPENAI_API_KEY is not set, questions will be answered with 500");
    }

    let state = Arc::new(AppState {
        openai: OpenAiClient::new(&args.openai_base_url, args.upstream_timeout())?,
        gate,
        api_key,
        model: args.model(),
    });

    let app = router(Arc::clone(&state));

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "gateway listening");
    info!(upstream = %state.openai.base_url(), model = %state.model, "forwarding questions");

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
