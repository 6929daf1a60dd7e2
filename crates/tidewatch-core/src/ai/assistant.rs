use std::sync::Arc;

use uuid::Uuid;

use super::interpreter::{interpret_answer, interpret_digest, interpret_quiz};
use super::models::{AnswerResult, SummaryResult};
use super::prompts::{digest_prompt, question_prompt, quiz_prompt};
use super::providers::{ChatCompletionClient, CompletionProvider, CompletionRequest};
use crate::config::AiConfig;
use crate::feed::Article;
use crate::quiz::{fallback_quiz, QuizQuestion, QuizResponse};
use crate::Result;

/// Runs the digest, question-answering, and quiz flows against a completion backend
pub struct Assistant {
    provider: Arc<dyn CompletionProvider>,
    config: AiConfig,
}

impl Assistant {
    pub fn new(provider: Arc<dyn CompletionProvider>, config: AiConfig) -> Self {
        Self { provider, config }
    }

    /// Build an assistant backed by the HTTP chat completions client
    pub fn from_config(config: &AiConfig) -> Result<Self> {
        let client = ChatCompletionClient::new(config)?;
        Ok(Self::new(Arc::new(client), config.clone()))
    }

    pub fn has_credential(&self) -> bool {
        self.config.has_credential()
    }

    /// Three-sentence digest of the articles plus an ocean-friendly tip
    pub async fn summarize(&self, articles: &[Article]) -> Result<SummaryResult> {
        self.config.credential()?;

        let request = CompletionRequest {
            prompt: digest_prompt(articles),
            max_tokens: self.config.digest_max_tokens,
            temperature: self.config.text_temperature,
        };

        tracing::info!("Summarizing {} articles", articles.len());
        let raw = self.provider.complete(&request).await?;
        Ok(interpret_digest(&raw))
    }

    /// Answer a free-form question grounded in the articles (or general knowledge when there are none)
    pub async fn answer(&self, articles: &[Article], question: &str) -> Result<AnswerResult> {
        self.config.credential()?;

        let request = CompletionRequest {
            prompt: question_prompt(articles, question),
            max_tokens: self.config.answer_max_tokens,
            temperature: self.config.text_temperature,
        };

        tracing::info!("Answering question against {} articles", articles.len());
        let raw = self.provider.complete(&request).await?;
        Ok(interpret_answer(&raw))
    }

    /// Five-question quiz. Never fails: any problem yields the local fallback quiz.
    pub async fn generate_quiz(&self) -> QuizResponse {
        let request_id = Uuid::new_v4().to_string();

        match self.generated_questions(&request_id).await {
            Ok(questions) => {
                tracing::info!("Generated quiz {} with {} questions", request_id, questions.len());
                QuizResponse {
                    request_id,
                    questions,
                    from_fallback: false,
                }
            }
            Err(reason) => {
                tracing::warn!("Using fallback quiz for {}: {}", request_id, reason);
                QuizResponse {
                    request_id,
                    questions: fallback_quiz(),
                    from_fallback: true,
                }
            }
        }
    }

    async fn generated_questions(&self, request_id: &str) -> std::result::Result<Vec<QuizQuestion>, String> {
        self.config.credential().map_err(|e| e.to_string())?;

        let request = CompletionRequest {
            prompt: quiz_prompt(request_id),
            max_tokens: self.config.quiz_max_tokens,
            temperature: self.config.quiz_temperature,
        };

        let raw = self.provider.complete(&request).await.map_err(|e| e.to_string())?;
        interpret_quiz(&raw).ok_or_else(|| "model output had no usable questions".to_string())
    }
}
