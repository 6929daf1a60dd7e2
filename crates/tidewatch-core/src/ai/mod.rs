mod assistant;
pub mod interpreter;
mod models;
pub mod prompts;
pub mod providers;

pub use assistant::Assistant;
pub use models::{AnswerResult, SummaryResult, DEFAULT_TIP, DIGEST_UNAVAILABLE, NO_ANSWER};
