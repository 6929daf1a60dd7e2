use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{CompletionProvider, CompletionRequest};
use crate::config::AiConfig;
use crate::{Error, Result};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// OpenAI-compatible chat completions client (Cerebras by default)
pub struct ChatCompletionClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
}

impl ChatCompletionClient {
    pub fn new(config: &AiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.api_base_url.trim_end_matches('/')),
            api_key: config.credential().ok().map(str::to_string),
            model: config.model.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl CompletionProvider for ChatCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(crate::config::missing_credential)?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        tracing::debug!(
            "Completion request: model={}, prompt_chars={}, max_tokens={}",
            self.model,
            request.prompt.len(),
            request.max_tokens
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Transient(format!("Completion request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transient(format!("Failed to read completion response: {}", e)))?;

        if !status.is_success() {
            tracing::error!("Completion service error {}: {}", status, text);
            return Err(Error::RemoteService {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text).map_err(|e| {
            tracing::error!("Undecodable completion response ({}): {}", e, text);
            Error::RemoteService {
                status: status.as_u16(),
                body: text.clone(),
            }
        })?;

        let choice = parsed.choices.into_iter().next().ok_or_else(|| {
            tracing::error!("Completion response has no choices: {}", text);
            Error::RemoteService {
                status: status.as_u16(),
                body: text.clone(),
            }
        })?;

        Ok(choice.message.content.unwrap_or_default())
    }
}
