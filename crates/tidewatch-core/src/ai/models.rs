use serde::{Deserialize, Serialize};

/// Tip used whenever the model does not supply a usable one
pub const DEFAULT_TIP: &str =
    "Reduce single-use plastics by carrying a reusable water bottle and shopping bag.";

/// Digest shown when a summary could not be produced at all
pub const DIGEST_UNAVAILABLE: &str = "Unable to generate summary at this time.";

pub const NO_ANSWER: &str = "No answer available.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub digest: String,
    pub tip_of_the_day: String,
}

impl SummaryResult {
    /// Raw model text as the digest, paired with the default tip
    pub fn from_raw(raw: &str) -> Self {
        let digest = if raw.trim().is_empty() {
            DIGEST_UNAVAILABLE.to_string()
        } else {
            raw.to_string()
        };

        Self {
            digest,
            tip_of_the_day: DEFAULT_TIP.to_string(),
        }
    }

    pub fn unavailable() -> Self {
        Self::from_raw("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub answer: String,
}
