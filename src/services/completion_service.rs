use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// A hosted model that turns one prompt into one block of text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

impl ChatResponse {
    fn into_text(self) -> AppResult<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::CompletionServiceFailure("completion returned no content".to_string())
            })
    }
}

/// A failed completion is surfaced as-is: 5xx and 429 responses are not retried.
fn single_attempt() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

/// Chat-completions client for OpenAI and compatible endpoints.
pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiCompletionClient {
    pub fn new(http: reqwest::Client, api_key: &SecretString, api_base: &str, model: &str) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(api_base);

        Self {
            client: Client::build(http, openai_config, single_attempt()),
            model: model.to_string(),
        }
    }

    /// `None` when no API key is configured.
    pub fn from_config(config: &Config, http: reqwest::Client) -> Option<Self> {
        config.openai_api_key.as_ref().map(|key| {
            Self::new(http, key, &config.openai_api_base, &config.completion_model)
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response: ChatResponse = self
            .client
            .chat()
            .create_byot(request)
            .await
            .map_err(|e| AppError::CompletionServiceFailure(e.to_string()))?;

        response.into_text()
    }
}
