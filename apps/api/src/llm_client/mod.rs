/// LLM Client: the single point of entry for all text-generation calls.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// The dispatcher only sees the `TextGenerator` trait.
///
/// One attempt per job: no retry, no cache, no rate limiting, no request timeout.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for every job.
pub const MODEL: &str = "claude-sonnet-4-6";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("ANTHROPIC_API_KEY is not set")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Outcome of one successful generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub text: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub model: String,
}

impl Generation {
    pub fn total_tokens(&self) -> u32 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// The generation capability the dispatcher depends on.
///
/// Carried as `Arc<dyn TextGenerator>` so tests can swap in a stub provider.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system: &str, prompt: &str) -> Result<Generation, LlmError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Wraps the Anthropic Messages API.
///
/// The API key is optional at construction; a missing key fails each call
/// with `LlmError::MissingApiKey` instead of stopping the process.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    api_url: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, api_url: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            api_url,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Makes a single raw call to the Messages API, returning the full response object.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(LlmError::MissingApiKey)?;

        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}: {}", status, body);
            // Try to parse error message
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, system: &str, prompt: &str) -> Result<Generation, LlmError> {
        let response = self.call(prompt, system).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?.to_string();

        Ok(Generation {
            text,
            input_tokens: response.usage.input_tokens,
            output_tokens: response.usage.output_tokens,
            model: response.model.unwrap_or_else(|| MODEL.to_string()),
        })
    }
}

#[cfg(test)]
pub mod testing {
    //! Stub provider for dispatcher, runner, and route tests.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;

    pub enum Behavior {
        Reply(Generation),
        Fail(String),
        Panic,
    }

    pub struct StubGenerator {
        behavior: Behavior,
        delay: Duration,
        calls: AtomicUsize,
        last: Mutex<Option<(String, String)>>,
    }

    impl StubGenerator {
        pub fn replying(text: &str, input_tokens: u32, output_tokens: u32) -> Self {
            Self::with_behavior(Behavior::Reply(Generation {
                text: text.to_string(),
                input_tokens,
                output_tokens,
                model: MODEL.to_string(),
            }))
        }

        pub fn failing(message: &str) -> Self {
            Self::with_behavior(Behavior::Fail(message.to_string()))
        }

        pub fn panicking() -> Self {
            Self::with_behavior(Behavior::Panic)
        }

        fn with_behavior(behavior: Behavior) -> Self {
            Self {
                behavior,
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            }
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// The (system, prompt) pair of the most recent call.
        pub fn last_call(&self) -> Option<(String, String)> {
            self.last.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, system: &str, prompt: &str) -> Result<Generation, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some((system.to_string(), prompt.to_string()));

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            match &self.behavior {
                Behavior::Reply(generation) => Ok(generation.clone()),
                Behavior::Fail(message) => Err(LlmError::Api {
                    status: 529,
                    message: message.clone(),
                }),
                Behavior::Panic => panic!("stub provider panicked"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    use super::*;

    /// Serves `handler` on an ephemeral port and returns the messages URL.
    async fn spawn_provider(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/v1/messages")
    }

    #[tokio::test]
    async fn test_generate_parses_text_and_usage() {
        let router = Router::new().route(
            "/v1/messages",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(headers["x-api-key"], "sk-test");
                assert_eq!(headers["anthropic-version"], ANTHROPIC_VERSION);
                assert_eq!(body["model"], MODEL);
                assert_eq!(body["system"], "SYSTEM");
                assert_eq!(body["messages"][0]["role"], "user");
                assert_eq!(body["messages"][0]["content"], "PROMPT");
                Json(json!({
                    "model": MODEL,
                    "content": [{"type": "text", "text": "INVOICE INV-001"}],
                    "usage": {"input_tokens": 120, "output_tokens": 380}
                }))
            }),
        );
        let url = spawn_provider(router).await;
        let client = LlmClient::new(Some("sk-test".to_string()), url).unwrap();

        let generation = client.generate("SYSTEM", "PROMPT").await.unwrap();
        assert_eq!(generation.text, "INVOICE INV-001");
        assert_eq!(generation.input_tokens, 120);
        assert_eq!(generation.output_tokens, 380);
        assert_eq!(generation.total_tokens(), 500);
        assert_eq!(generation.model, MODEL);
    }

    #[tokio::test]
    async fn test_generate_surfaces_provider_error_message() {
        let router = Router::new().route(
            "/v1/messages",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "type": "error",
                        "error": {"type": "invalid_request_error", "message": "max_tokens too large"}
                    })),
                )
            }),
        );
        let url = spawn_provider(router).await;
        let client = LlmClient::new(Some("sk-test".to_string()), url).unwrap();

        let err = client.generate("SYSTEM", "PROMPT").await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "max_tokens too large");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let router = Router::new().route(
            "/v1/messages",
            post(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    (StatusCode::SERVICE_UNAVAILABLE, "overloaded")
                }
            }),
        );
        let url = spawn_provider(router).await;
        let client = LlmClient::new(Some("sk-test".to_string()), url).unwrap();

        let err = client.generate("SYSTEM", "PROMPT").await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, ref message } if message == "overloaded"));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generate_without_text_block_is_empty_content() {
        let router = Router::new().route(
            "/v1/messages",
            post(|| async {
                Json(json!({
                    "content": [{"type": "tool_use"}],
                    "usage": {"input_tokens": 5, "output_tokens": 0}
                }))
            }),
        );
        let url = spawn_provider(router).await;
        let client = LlmClient::new(Some("sk-test".to_string()), url).unwrap();

        let err = client.generate("SYSTEM", "PROMPT").await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network_call() {
        // Unroutable URL: if a request were attempted it would be an Http error instead.
        let client = LlmClient::new(None, "http://127.0.0.1:9/v1/messages".to_string()).unwrap();
        assert!(!client.has_api_key());

        let err = client.generate("SYSTEM", "PROMPT").await.unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
        assert_eq!(err.to_string(), "ANTHROPIC_API_KEY is not set");
    }

    #[tokio::test]
    async fn test_empty_api_key_counts_as_missing() {
        let client =
            LlmClient::new(Some(String::new()), DEFAULT_API_URL.to_string()).unwrap();
        assert!(!client.has_api_key());
        let err = client.generate("SYSTEM", "PROMPT").await.unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }

    #[test]
    fn test_total_tokens_saturates() {
        let generation = Generation {
            text: "x".to_string(),
            input_tokens: u32::MAX,
            output_tokens: 10,
            model: MODEL.to_string(),
        };
        assert_eq!(generation.total_tokens(), u32::MAX);
    }

    #[test]
    fn test_response_text_picks_first_text_block() {
        let response: LlmResponse = serde_json::from_value(json!({
            "content": [
                {"type": "thinking"},
                {"type": "text", "text": "first"},
                {"type": "text", "text": "second"}
            ],
            "usage": {"input_tokens": 1, "output_tokens": 2}
        }))
        .unwrap();
        assert_eq!(response.text(), Some("first"));
        assert!(response.model.is_none());
    }
}
