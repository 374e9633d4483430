use clap::Parser;
use std::time::Duration;

use crate::openai::DEFAULT_BASE_URL;

pub const DEFAULT_MODEL: &str = "gpt-4o";

// CLI argument structure, secrets and model also readable from env
#[derive(Parser, Debug, Clone)]
#[command(name = "infoseeker-gateway")]
#[command(about = "Fact-focused question answering proxy for the OpenAI chat API")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    // OpenAI credential; requests fail with 500 while it is unset
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    pub openai_model: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub openai_base_url: String,

    // Upstream request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub upstream_timeout: u64,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 30)]
    pub rate_limit: u32,

    // Rate limit window in milliseconds
    #[arg(long, default_value_t = 60_000)]
    pub rate_window_ms: u64,

    // Seconds between sweeps of expired rate records, 0 keeps every record
    #[arg(long, default_value_t = 0)]
    pub sweep_interval: u64,

    // Default log filter, RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn api_key(&self) -> Option<String> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_owned)
    }

    pub fn model(&self) -> String {
        match self.openai_model.trim() {
            "" => DEFAULT_MODEL.to_string(),
            model => model.to_string(),
        }
    }

    pub fn rate_window(&self) -> Duration {
        Duration::from_millis(self.rate_window_ms)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }

    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval > 0).then(|| Duration::from_secs(self.sweep_interval))
    }
}
