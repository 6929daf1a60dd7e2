//! Prompt templates for the completion service.
//!
//! Pure string building: no I/O, inputs are only borrowed.

use crate::feed::Article;

/// Numbered `i. title\ncontent` entries separated by blank lines
fn digest_listing(articles: &[Article]) -> String {
    articles
        .iter()
        .enumerate()
        .map(|(i, a)| format!("{}. {}\n{}", i + 1, a.title, a.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Numbered `Article i: title\ncontent` entries separated by blank lines
fn question_listing(articles: &[Article]) -> String {
    articles
        .iter()
        .enumerate()
        .map(|(i, a)| format!("Article {}: {}\n{}", i + 1, a.title, a.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn digest_prompt(articles: &[Article]) -> String {
    let listing = digest_listing(articles);

    format!(
        "You are an expert ocean-environment analyst. Based on these recent ocean pollution articles:\n\n\
{listing}\n\n\
Provide a response in this exact JSON format:\n\
{{\n  \
\"digest\": \"A summary of the key ocean pollution issues covered in these articles, in exactly 3 sentences\",\n  \
\"tipOfTheDay\": \"One practical, actionable tip individuals can do today to help reduce marine pollution\"\n\
}}\n\n\
Return ONLY valid JSON, no other text."
    )
}

pub fn question_prompt(articles: &[Article], question: &str) -> String {
    if articles.is_empty() {
        return format!(
            "You are an ocean-environment expert. No articles are available for this question, \
so answer from your general knowledge of marine science and ocean pollution. \
Do not ask for articles or additional context.\n\n\
Question: {question}\n\n\
Answer factually and concisely. Do not invent sources, studies, or articles."
        );
    }

    let listing = question_listing(articles);

    format!(
        "You are an ocean-environment expert. Use these ocean pollution articles as context:\n\n\
{listing}\n\n\
Question: {question}\n\n\
Answer factually and concisely. When a statement is supported by the articles above, \
cite it as \"Article N\". If the articles do not cover the question, answer from general \
knowledge and say so. Never invent sources or cite articles that are not listed."
    )
}

/// `request_id` only makes each prompt unique so the service does not replay a cached quiz
pub fn quiz_prompt(request_id: &str) -> String {
    format!(
        "Create a fresh quiz about marine pollution and ocean health (request {request_id}).\n\n\
Write exactly 5 multiple-choice questions. Each question must have exactly 4 choices, \
exactly one correct answer given as \"correctIndex\" (0-3, the position in \"choices\"), \
and a short \"explanation\" of why that answer is correct. Use well-established facts only.\n\n\
Respond with ONLY valid JSON in this format, no other text:\n\
{{\"questions\": [{{\"question\": \"...\", \"choices\": [\"...\", \"...\", \"...\", \"...\"], \
\"correctIndex\": 0, \"explanation\": \"...\"}}]}}"
    )
}
