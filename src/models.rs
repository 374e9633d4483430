use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prompt::Lang;

// Inbound ask request, already normalized
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AskRequest {
    pub question: Option<String>, // trimmed, never empty
    pub lang: Lang,
}

impl AskRequest {
    // Lenient decode: a malformed body or wrongly typed field counts as absent
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

        let question = value
            .get("question")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_owned);

        let lang = Lang::from_tag(value.get("lang").and_then(Value::as_str));

        Self { question, lang }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// OpenAI chat completion request format
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

// OpenAI chat completion response format, only the parts we read
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
    }
}

// OpenAI error envelope: {"error": {"message": "..."}}
#[derive(Debug, Deserialize)]
pub struct UpstreamErrorBody {
    pub error: Option<UpstreamErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamErrorDetail {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_is_trimmed() {
        let req = AskRequest::from_body(br#"{"question": "  Who wrote Gitanjali?  "}"#);
        assert_eq!(req.question.as_deref(), Some("Who wrote Gitanjali?"));
        assert_eq!(req.lang, Lang::En);
    }

    #[test]
    fn blank_or_missing_question() {
        assert_eq!(AskRequest::from_body(br#"{"question": "   "}"#).question, None);
        assert_eq!(AskRequest::from_body(br#"{"question": ""}"#).question, None);
        assert_eq!(AskRequest::from_body(br#"{}"#).question, None);
        assert_eq!(AskRequest::from_body(b"").question, None);
        assert_eq!(AskRequest::from_body(b"not json").question, None);
        assert_eq!(AskRequest::from_body(br#"{"question": 42}"#).question, None);
    }

    #[test]
    fn lang_only_bn_switches() {
        let bn = AskRequest::from_body(br#"{"question": "q", "lang": "bn"}"#);
        assert_eq!(bn.lang, Lang::Bn);

        for body in [
            br#"{"question": "q", "lang": "en"}"#.as_slice(),
            br#"{"question": "q", "lang": "BN"}"#.as_slice(),
            br#"{"question": "q", "lang": "fr"}"#.as_slice(),
            br#"{"question": "q", "lang": 7}"#.as_slice(),
        ] {
            let req = AskRequest::from_body(body);
            assert_eq!(req.lang, Lang::En);
            assert_eq!(req.question.as_deref(), Some("q"));
        }
    }

    #[test]
    fn first_content_falls_back_to_none() {
        let empty: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(empty.first_content(), None);

        let blank: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": "  \n"}}]}"#).unwrap();
        assert_eq!(blank.first_content(), None);

        let answer: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": " Dhaka. \n"}}]}"#,
        )
        .unwrap();
        assert_eq!(answer.first_content().as_deref(), Some("Dhaka."));
    }
}
