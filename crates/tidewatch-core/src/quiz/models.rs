use serde::{Deserialize, Serialize};

pub const CHOICES_PER_QUESTION: usize = 4;
pub const QUESTIONS_PER_QUIZ: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// 1-based position within one quiz
    pub id: usize,
    pub question: String,
    pub choices: Vec<String>,
    /// Index into `choices` of the right answer
    pub correct_index: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn correct_choice(&self) -> Option<&str> {
        self.choices.get(self.correct_index).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    /// Correlation id also embedded in the quiz prompt
    pub request_id: String,
    pub questions: Vec<QuizQuestion>,
    /// Whether the local question bank was used instead of the model
    #[serde(skip)]
    pub from_fallback: bool,
}
