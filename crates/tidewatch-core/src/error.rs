use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed fetch error: {0}")]
    FeedFetch(String),

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Completion endpoint answered with a non-success status or an unusable body
    #[error("Completion service error (status {status})")]
    RemoteService { status: u16, body: String },

    /// Network failure or timeout while talking to the completion endpoint
    #[error("Completion service unreachable: {0}")]
    Transient(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// True for failures of the completion service itself (as opposed to local misconfiguration)
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::RemoteService { .. } | Error::Transient(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
