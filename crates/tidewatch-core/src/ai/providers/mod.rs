mod chat_api;

pub use chat_api::ChatCompletionClient;

use crate::Result;

/// One completion call: prompt plus sampling limits
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    /// Output-length ceiling in tokens
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Trait for text-completion backends
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send the prompt and return the raw text of the first choice
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
