mod fallback;
mod models;

pub use fallback::{fallback_quiz, fallback_quiz_with};
pub use models::{QuizQuestion, QuizResponse, CHOICES_PER_QUESTION, QUESTIONS_PER_QUIZ};
