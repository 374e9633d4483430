use std::sync::Arc;
use crate::openai::OpenAiClient;
use crate::rate_limit::AdmissionGate;
// app's shared state

pub struct AppState {
    pub openai: OpenAiClient,
    pub gate: Arc<dyn AdmissionGate>, // per client admission, swappable store
    pub api_key: Option<String>,      // checked per request, not at startup
    pub model: String,
}
