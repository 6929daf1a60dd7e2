use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use tidewatch_core::{AppConfig, Assistant, FeedAggregator, FeedFetcher};

pub mod error;
pub mod handlers;

pub struct AppState {
    pub aggregator: Arc<FeedAggregator>,
    pub assistant: Arc<Assistant>,
}

impl AppState {
    pub fn new(aggregator: FeedAggregator, assistant: Assistant) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
            assistant: Arc::new(assistant),
        }
    }

    /// Wire the HTTP feed fetcher and completion client from configuration
    pub fn from_config(config: &AppConfig) -> tidewatch_core::Result<Self> {
        let fetcher = FeedFetcher::new(&config.feeds)?;
        let aggregator = FeedAggregator::new(Arc::new(fetcher), &config.feeds)?;
        let assistant = Assistant::from_config(&config.ai)?;
        Ok(Self::new(aggregator, assistant))
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/fetch-feeds", get(handlers::fetch_feeds))
        .route("/api/summarize", post(handlers::summarize))
        .route("/api/generate-quiz", get(handlers::generate_quiz))
        .route("/api/health", get(handlers::health))
        .layer(cors)
        .with_state(Arc::new(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use chrono::{Duration, Utc};
    use serde_json::{json, Value};
    use std::sync::Mutex;
    use tidewatch_core::ai::providers::{CompletionProvider, CompletionRequest};
    use tidewatch_core::ai::{DEFAULT_TIP, DIGEST_UNAVAILABLE};
    use tidewatch_core::config::{AiConfig, FeedSource, FeedsConfig};
    use tidewatch_core::feed::{FeedReader, RawFeedItem};
    use tidewatch_core::Error;
    use tower::ServiceExt;

    struct StubReader;

    #[async_trait::async_trait]
    impl FeedReader for StubReader {
        async fn read(&self, source: &FeedSource) -> tidewatch_core::Result<Vec<RawFeedItem>> {
            if source.url.contains("broken") {
                return Err(Error::FeedFetch("HTTP 500".to_string()));
            }
            let age_hours = if source.url.contains("one") { 2 } else { 3 };
            Ok(vec![
                RawFeedItem {
                    title: "Ocean heatwave spreads".to_string(),
                    link: format!("{}/heatwave", source.url),
                    snippet: "<p>Marine heatwaves are <b>longer</b> than before.</p>".to_string(),
                    published: Some(Utc::now() - Duration::hours(age_hours)),
                    updated: None,
                },
                RawFeedItem {
                    title: "Stock markets rally".to_string(),
                    link: format!("{}/stocks", source.url),
                    snippet: "Shares rose on Tuesday.".to_string(),
                    published: Some(Utc::now()),
                    updated: None,
                },
            ])
        }
    }

    #[derive(Default)]
    struct MockProvider {
        reply: Option<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }

        fn last_prompt(&self) -> String {
            self.prompts.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl CompletionProvider for MockProvider {
        async fn complete(&self, request: &CompletionRequest) -> tidewatch_core::Result<String> {
            self.prompts.lock().unwrap().push(request.prompt.clone());
            self.reply.clone().ok_or_else(|| Error::RemoteService {
                status: 503,
                body: "upstream overloaded".to_string(),
            })
        }
    }

    fn app(provider: Arc<MockProvider>, api_key: Option<&str>) -> Router {
        let feeds = FeedsConfig {
            sources: vec![
                FeedSource::new("https://one.example"),
                FeedSource::new("https://broken.example"),
                FeedSource::new("https://three.example"),
            ],
            ..FeedsConfig::default()
        };
        let ai = AiConfig {
            api_key: api_key.map(str::to_string),
            ..AiConfig::default()
        };

        router(AppState::new(
            FeedAggregator::new(Arc::new(StubReader), &feeds).unwrap(),
            Assistant::new(provider, ai),
        ))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn sample_articles() -> Value {
        json!([{
            "title": "Kelp forests return",
            "url": "https://example.com/kelp",
            "content": "Sea otters are helping kelp recover.",
            "date": "2025-03-01T10:00:00Z"
        }])
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(Arc::default(), None), get("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_fetch_feeds_skips_failing_source() {
        let (status, body) = send(app(Arc::default(), None), get("/api/fetch-feeds")).await;
        assert_eq!(status, StatusCode::OK);

        let articles = body["articles"].as_array().unwrap();
        let urls: Vec<_> = articles.iter().map(|a| a["url"].as_str().unwrap()).collect();
        assert_eq!(
            urls,
            vec!["https://one.example/heatwave", "https://three.example/heatwave"]
        );
        assert_eq!(
            articles[0]["content"],
            "Marine heatwaves are longer than before."
        );
    }

    #[tokio::test]
    async fn test_summarize_without_credential_skips_provider() {
        let provider = Arc::new(MockProvider::default());

        let (status, body) = send(
            app(provider.clone(), None),
            post_json("/api/summarize", json!({ "articles": sample_articles() })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("CEREBRAS_API_KEY"));
        assert_eq!(body["digest"], DIGEST_UNAVAILABLE);
        assert_eq!(body["tipOfTheDay"], DEFAULT_TIP);

        let (status, body) = send(
            app(provider.clone(), Some("your_cerebras_api_key_here")),
            post_json("/api/summarize", json!({ "question": "Why is kelp important?" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.get("answer").is_none());
        assert!(body["error"].is_string());

        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_summarize_digest_mode() {
        let provider = Arc::new(MockProvider {
            reply: Some(r#"Sure! {"digest":"Kelp is back.","tipOfTheDay":"Eat sustainable seafood."}"#.to_string()),
            ..MockProvider::default()
        });

        let (status, body) = send(
            app(provider.clone(), Some("sk-test")),
            post_json(
                "/api/summarize",
                json!({ "articles": sample_articles(), "question": "   " }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "digest": "Kelp is back.", "tipOfTheDay": "Eat sustainable seafood." }));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_summarize_question_mode() {
        let provider = Arc::new(MockProvider {
            reply: Some("Article 1 says otters help kelp recover.".to_string()),
            ..MockProvider::default()
        });

        let (status, body) = send(
            app(provider.clone(), Some("sk-test")),
            post_json(
                "/api/summarize",
                json!({ "articles": sample_articles(), "question": "  What helps kelp?\n" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "answer": "Article 1 says otters help kelp recover." }));
        assert!(provider.last_prompt().contains("Question:   What helps kelp?\n"));
    }

    #[tokio::test]
    async fn test_summarize_accepts_feed_style_dates() {
        let provider = Arc::new(MockProvider {
            reply: Some(r#"{"digest":"Kelp is back.","tipOfTheDay":"Eat sustainable seafood."}"#.to_string()),
            ..MockProvider::default()
        });

        let (status, body) = send(
            app(provider.clone(), Some("sk-test")),
            post_json(
                "/api/summarize",
                json!({ "articles": [
                    { "title": "t", "url": "u", "content": "c", "date": "Mon, 10 Mar 2025 09:00:00 GMT" },
                    { "title": "t2", "url": "u2", "content": "c2", "date": "sometime last week" }
                ] }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["digest"], "Kelp is back.");
        assert_eq!(provider.calls(), 1);
        assert!(provider.last_prompt().contains("2. t2\nc2"));
    }

    #[tokio::test]
    async fn test_summarize_rejects_malformed_body_with_json() {
        let provider = Arc::new(MockProvider::default());

        let requests = vec![
            Request::builder()
                .method("POST")
                .uri("/api/summarize")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"articles": [ "#))
                .unwrap(),
            post_json("/api/summarize", json!({ "articles": "not a list" })),
        ];

        for request in requests {
            let response = app(provider.clone(), Some("sk-test")).oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response.headers().get(header::CONTENT_TYPE).unwrap(),
                "application/json"
            );

            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
            assert_eq!(body["digest"], DIGEST_UNAVAILABLE);
            assert_eq!(body["tipOfTheDay"], DEFAULT_TIP);
        }

        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_remote_failure_status_codes() {
        let provider = Arc::new(MockProvider::default());

        let (status, body) = send(
            app(provider.clone(), Some("sk-test")),
            post_json("/api/summarize", json!({ "articles": [] })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["digest"], DIGEST_UNAVAILABLE);
        assert!(!body["error"].as_str().unwrap().contains("overloaded"));

        let (status, body) = send(
            app(provider, Some("sk-test")),
            post_json("/api/summarize", json!({ "question": "Is the sea rising?" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_generate_quiz_falls_back() {
        let provider = Arc::new(MockProvider::default());

        let (status, body) = send(
            app(provider.clone(), Some("sk-test")),
            get("/api/generate-quiz?t=1718000000000"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["requestId"].as_str().is_some_and(|id| !id.is_empty()));

        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 5);
        for q in questions {
            let choices = q["choices"].as_array().unwrap();
            assert_eq!(choices.len(), 4);
            assert!(q["correctIndex"].as_u64().unwrap() < 4);
        }
        assert!(body.get("fromFallback").is_none());
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let request = Request::builder()
            .uri("/api/health")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();

        let response = app(Arc::default(), None).oneshot(request).await.unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
