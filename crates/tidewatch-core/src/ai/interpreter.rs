use serde_json::{Map, Value};

use super::models::{AnswerResult, SummaryResult, DEFAULT_TIP, NO_ANSWER};
use crate::quiz::{QuizQuestion, CHOICES_PER_QUESTION, QUESTIONS_PER_QUIZ};

/// Slice from the first `{` to the last `}` inclusive, if that span exists
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

fn parse_object(raw: &str) -> Option<Map<String, Value>> {
    let candidate = extract_json_object(raw)?;
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!("Model output is not valid JSON: {}", e);
            None
        }
    }
}

fn non_blank_str<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| map.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
}

/// Answers are free text, passed through as-is
pub fn interpret_answer(raw: &str) -> AnswerResult {
    let answer = if raw.trim().is_empty() {
        NO_ANSWER.to_string()
    } else {
        raw.to_string()
    };
    AnswerResult { answer }
}

/// Read `{"digest", "tipOfTheDay"}` out of model text, falling back to the raw text as the digest
pub fn interpret_digest(raw: &str) -> SummaryResult {
    let Some(map) = parse_object(raw) else {
        return SummaryResult::from_raw(raw);
    };

    let Some(digest) = non_blank_str(&map, &["digest"]) else {
        return SummaryResult::from_raw(raw);
    };

    let tip = non_blank_str(&map, &["tipOfTheDay", "tip_of_the_day", "tip"]).unwrap_or(DEFAULT_TIP);

    SummaryResult {
        digest: digest.to_string(),
        tip_of_the_day: tip.to_string(),
    }
}

/// Normalize a generated quiz. `None` means nothing usable came back.
///
/// Entries without question text or without exactly four string choices are
/// skipped; at most five are kept and renumbered from 1. A missing,
/// non-numeric, or out-of-range `correctIndex` becomes 0.
pub fn interpret_quiz(raw: &str) -> Option<Vec<QuizQuestion>> {
    let map = parse_object(raw)?;
    let entries = map.get("questions")?.as_array()?;

    let questions: Vec<QuizQuestion> = entries
        .iter()
        .filter_map(Value::as_object)
        .filter_map(normalize_question)
        .take(QUESTIONS_PER_QUIZ)
        .enumerate()
        .map(|(i, mut q)| {
            q.id = i + 1;
            q
        })
        .collect();

    if questions.is_empty() {
        tracing::warn!("Generated quiz had no usable questions");
        return None;
    }

    Some(questions)
}

fn normalize_question(entry: &Map<String, Value>) -> Option<QuizQuestion> {
    let question = non_blank_str(entry, &["question", "text"])?;

    let choices: Vec<String> = entry
        .get("choices")
        .or_else(|| entry.get("options"))?
        .as_array()?
        .iter()
        .map(|c| c.as_str().map(|s| s.trim().to_string()))
        .collect::<Option<_>>()?;

    if choices.len() != CHOICES_PER_QUESTION {
        return None;
    }

    let correct_index = entry
        .get("correctIndex")
        .or_else(|| entry.get("correct_index"))
        .and_then(|v| match v {
            Value::Number(n) => n.as_u64().map(|n| n as usize),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .filter(|i| *i < CHOICES_PER_QUESTION)
        .unwrap_or(0);

    let explanation = entry
        .get("explanation")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string();

    Some(QuizQuestion {
        id: 0,
        question: question.to_string(),
        choices,
        correct_index,
        explanation,
    })
}
