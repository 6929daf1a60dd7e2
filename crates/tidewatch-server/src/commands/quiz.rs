use anyhow::Result;

use tidewatch_core::{AppConfig, Assistant};

pub async fn run(config: &AppConfig) -> Result<()> {
    let assistant = Assistant::from_config(&config.ai)?;
    let quiz = assistant.generate_quiz().await;

    let origin = if quiz.from_fallback { " (offline question bank)" } else { "" };
    println!("Quiz {}{}\n", quiz.request_id, origin);

    for q in &quiz.questions {
        println!("{}. {}", q.id, q.question);
        for (i, choice) in q.choices.iter().enumerate() {
            let marker = if i == q.correct_index { '*' } else { ' ' };
            println!("  {} {}) {}", marker, (b'a' + i as u8) as char, choice);
        }
        if !q.explanation.is_empty() {
            println!("    {}", q.explanation);
        }
        println!();
    }

    Ok(())
}
