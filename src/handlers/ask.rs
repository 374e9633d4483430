use axum::{
    Json,
    body::Bytes,
    extract::{ConnectInfo, FromRequest, Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::client_id::client_identifier;
use crate::error::{AppError, Result};
use crate::metrics::{
    ASK_REQUESTS_TOTAL, RATE_LIMIT_TRACKED_CLIENTS, RATE_LIMITED_TOTAL, UPSTREAM_ERRORS_TOTAL,
    UPSTREAM_LATENCY,
};
use crate::models::{AskRequest, AskResponse};
use crate::prompt;
use crate::state::AppState;

pub const MAX_BODY_BYTES: usize = 64 * 1024;

// Any method lands here; OPTIONS is answered before the rate limiter sees it
pub async fn ask_handler(State(state): State<Arc<AppState>>, req: Request) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }

    ASK_REQUESTS_TOTAL.inc();

    match answer(&state, req).await {
        Ok(json) => json.into_response(),
        Err(e) => e.into_response(),
    }
}

async fn answer(state: &AppState, req: Request) -> Result<Json<AskResponse>> {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let client = client_identifier(req.headers(), peer);

    let admitted = state.gate.admit(&client, Instant::now());
    RATE_LIMIT_TRACKED_CLIENTS.set(state.gate.tracked_clients() as f64);
    if !admitted {
        RATE_LIMITED_TOTAL.inc();
        warn!(%client, "rate limit exceeded");
        return Err(AppError::RateLimited);
    }

    // only POST carries a body worth reading
    let ask = if req.method() == Method::POST {
        // the limit comes from the DefaultBodyLimit layer on the route
        let body = Bytes::from_request(req, &()).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                warn!(%client, limit = MAX_BODY_BYTES, "request body too large");
                AppError::PayloadTooLarge
            } else {
                AppError::Internal(format!("failed to read request body: {}", rejection.body_text()))
            }
        })?;
        AskRequest::from_body(&body)
    } else {
        AskRequest::default()
    };

    let question = ask.question.ok_or(AppError::MissingQuestion)?;
    let api_key = state.api_key.as_deref().ok_or(AppError::MissingApiKey)?;

    let system = prompt::system_prompt(ask.lang);
    let user = prompt::user_prompt(ask.lang, &question);

    let start_time = Instant::now();
    let result = state.openai.chat(api_key, &state.model, system, &user).await;
    let elapsed = start_time.elapsed();
    UPSTREAM_LATENCY.observe(elapsed.as_secs_f64());

    let content = result.inspect_err(|_| UPSTREAM_ERRORS_TOTAL.inc())?;
    let answer = content.unwrap_or_else(|| prompt::no_answer(ask.lang).to_string());

    info!(
        %client,
        lang = ask.lang.as_str(),
        model = %state.model,
        elapsed_ms = elapsed.as_millis() as u64,
        "question answered"
    );

    Ok(Json(AskResponse {
        answer,
        model: state.model.clone(),
    }))
}
