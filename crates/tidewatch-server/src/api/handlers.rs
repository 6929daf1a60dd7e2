use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use tidewatch_core::Article;

use super::error::ApiError;
use super::AppState;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub question: Option<String>,
}

pub async fn fetch_feeds(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let aggregator = Arc::clone(&state.aggregator);
    let articles = tokio::spawn(async move { aggregator.aggregate().await })
        .await
        .map_err(|e| ApiError::Feeds(e.to_string()))?;

    tracing::info!("Serving {} articles", articles.len());
    Ok(Json(json!({ "articles": articles })))
}

/// Question mode when a non-blank question is present, digest mode otherwise
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<axum::response::Response, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

    let question = request
        .question
        .as_deref()
        .filter(|q| !q.trim().is_empty());

    match question {
        Some(question) => {
            let answer = state
                .assistant
                .answer(&request.articles, question)
                .await
                .map_err(ApiError::Answer)?;
            Ok(Json(answer).into_response())
        }
        None => {
            let summary = state
                .assistant
                .summarize(&request.articles)
                .await
                .map_err(ApiError::Digest)?;
            Ok(Json(summary).into_response())
        }
    }
}

pub async fn generate_quiz(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let assistant = Arc::clone(&state.assistant);
    let quiz = tokio::spawn(async move { assistant.generate_quiz().await })
        .await
        .map_err(|e| ApiError::Quiz(e.to_string()))?;

    Ok(Json(quiz))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}
