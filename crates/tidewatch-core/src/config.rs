use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Credential value shipped in the sample `.env`; treated as "not configured"
pub const PLACEHOLDER_API_KEY: &str = "your_cerebras_api_key_here";

const ENV_API_KEY: &str = "CEREBRAS_API_KEY";
const ENV_MODEL: &str = "CEREBRAS_MODEL";
const ENV_PORT: &str = "PORT";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub feeds: FeedsConfig,
    #[serde(default)]
    pub ai: AiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// A feed endpoint together with the number of entries read from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub url: String,
    #[serde(default = "default_items_per_source")]
    pub max_items: usize,
}

impl FeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_items: default_items_per_source(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedsConfig {
    #[serde(default = "default_sources")]
    pub sources: Vec<FeedSource>,
    /// Topical substrings; an entry must mention at least one
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    /// Entries older than this are dropped
    #[serde(default = "default_max_age_days")]
    pub max_age_days: i64,
    #[serde(default = "default_max_articles")]
    pub max_articles: usize,
    /// Character cap for article content after tag stripping
    #[serde(default = "default_max_content_chars")]
    pub max_content_chars: usize,
    #[serde(default = "default_feed_timeout")]
    pub request_timeout_secs: u64,
    /// HTTP proxy URL for feed fetching (e.g., "http://127.0.0.1:7890" or "socks5://127.0.0.1:1080")
    #[serde(default)]
    pub proxy_url: Option<String>,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            keywords: default_keywords(),
            max_age_days: default_max_age_days(),
            max_articles: default_max_articles(),
            max_content_chars: default_max_content_chars(),
            request_timeout_secs: default_feed_timeout(),
            proxy_url: None,
        }
    }
}

impl FeedsConfig {
    /// Recency window as a duration; negative or out-of-range day counts are rejected
    pub fn max_age(&self) -> crate::Result<Duration> {
        Duration::try_days(self.max_age_days)
            .filter(|age| *age >= Duration::zero())
            .ok_or_else(|| {
                crate::Error::Config(format!("Invalid feeds.max_age_days: {}", self.max_age_days))
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// OpenAI-compatible chat completions endpoint
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_ai_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_digest_max_tokens")]
    pub digest_max_tokens: u32,
    #[serde(default = "default_answer_max_tokens")]
    pub answer_max_tokens: u32,
    #[serde(default = "default_quiz_max_tokens")]
    pub quiz_max_tokens: u32,
    /// Sampling temperature for digest and answer text
    #[serde(default = "default_text_temperature")]
    pub text_temperature: f32,
    #[serde(default = "default_quiz_temperature")]
    pub quiz_temperature: f32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: None,
            model: default_model(),
            request_timeout_secs: default_ai_timeout(),
            digest_max_tokens: default_digest_max_tokens(),
            answer_max_tokens: default_answer_max_tokens(),
            quiz_max_tokens: default_quiz_max_tokens(),
            text_temperature: default_text_temperature(),
            quiz_temperature: default_quiz_temperature(),
        }
    }
}

impl AiConfig {
    /// The configured API key, or a configuration error when it is absent or still the placeholder
    pub fn credential(&self) -> crate::Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() && key != PLACEHOLDER_API_KEY => Ok(key),
            _ => Err(missing_credential()),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.credential().is_ok()
    }
}

pub(crate) fn missing_credential() -> crate::Error {
    crate::Error::Config(format!(
        "Completion API key not configured. Please add {} to your .env file.",
        ENV_API_KEY
    ))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_items_per_source() -> usize {
    20
}

fn default_sources() -> Vec<FeedSource> {
    [
        "https://www.unep.org/news-and-stories/rss.xml",
        "https://www.noaa.gov/news-and-features/feeds/ocean-coasts.xml",
        "https://www.theguardian.com/environment/rss",
    ]
    .into_iter()
    .map(FeedSource::new)
    .collect()
}

fn default_keywords() -> Vec<String> {
    [
        "ocean", "marine", "sea", "pollution", "plastic", "coastal", "water", "climate", "fish",
        "coral",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_max_age_days() -> i64 {
    7
}

fn default_max_articles() -> usize {
    7
}

fn default_max_content_chars() -> usize {
    1000
}

fn default_feed_timeout() -> u64 {
    20
}

fn default_api_base_url() -> String {
    "https://api.cerebras.ai/v1".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b".to_string()
}

fn default_ai_timeout() -> u64 {
    30
}

fn default_digest_max_tokens() -> u32 {
    500
}

fn default_answer_max_tokens() -> u32 {
    300
}

fn default_quiz_max_tokens() -> u32 {
    900
}

fn default_text_temperature() -> f32 {
    0.7
}

fn default_quiz_temperature() -> f32 {
    0.3
}

impl AppConfig {
    /// Load configuration from file (explicit path or the default location), then apply environment overrides
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        let mut config = if config_path.exists() {
            Self::from_file(&config_path)?
        } else if path.is_some() {
            return Err(crate::Error::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot be used
    pub fn validate(&self) -> crate::Result<()> {
        self.feeds.max_age()?;
        Ok(())
    }

    /// Apply CEREBRAS_API_KEY / CEREBRAS_MODEL / PORT from the given lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> crate::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).filter(|k| !k.trim().is_empty()) {
            self.ai.api_key = Some(key);
        }

        if let Some(model) = lookup(ENV_MODEL).filter(|m| !m.trim().is_empty()) {
            self.ai.model = model;
        }

        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| crate::Error::Config(format!("Invalid {} value: {}", ENV_PORT, port)))?;
        }

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/tidewatch/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("tidewatch")
            .join("config.toml")
    }
}
