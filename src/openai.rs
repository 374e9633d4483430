use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, UpstreamErrorBody};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const MAX_TOKENS: u32 = 600;
pub const TEMPERATURE: f64 = 0.0;
pub const TOP_P: f64 = 1.0;

const FALLBACK_UPSTREAM_ERROR: &str = "OpenAI API error";

// Chat completion client - one call per admitted question, no retries
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one system + user exchange and returns the trimmed answer.
    ///
    /// `Ok(None)` means the API answered successfully but without content.
    pub async fn chat(
        &self,
        api_key: &str,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<Option<String>> {
        let request = ChatCompletionRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        };

        let res = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = res.status();
        let body = res.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<UpstreamErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| FALLBACK_UPSTREAM_ERROR.to_string());

            warn!(status = status.as_u16(), %message, "chat completion rejected");
            return Err(AppError::Upstream(message));
        }

        let parsed: ChatCompletionResponse = serde_json::from_slice(&body)?;
        debug!(choices = parsed.choices.len(), "chat completion received");

        Ok(parsed.first_content())
    }
}
