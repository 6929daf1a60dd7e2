use rand::seq::SliceRandom;
use rand::Rng;

use super::models::QuizQuestion;

struct BankEntry {
    question: &'static str,
    correct: &'static str,
    distractors: [&'static str; 3],
    explanation: &'static str,
}

const BANK: [BankEntry; 5] = [
    BankEntry {
        question: "Roughly how much plastic enters the ocean every year?",
        correct: "About 11 million metric tons",
        distractors: [
            "About 50,000 metric tons",
            "About 500 million metric tons",
            "Less than 1,000 metric tons",
        ],
        explanation: "Current estimates put plastic flowing into the ocean at around 11 million metric tons a year, and the amount is growing.",
    },
    BankEntry {
        question: "What are microplastics?",
        correct: "Plastic fragments smaller than 5 millimetres",
        distractors: [
            "Biodegradable plastics made from plants",
            "Plastic bags thinner than 1 millimetre",
            "Plastics that dissolve completely in seawater",
        ],
        explanation: "Microplastics are pieces under 5 mm, coming from broken-down debris, microbeads, and synthetic clothing fibres.",
    },
    BankEntry {
        question: "What is the main driver of mass coral bleaching?",
        correct: "Rising ocean temperatures",
        distractors: [
            "Too many sharks on the reef",
            "Underwater noise from shipping",
            "Lower ocean salinity near the equator",
        ],
        explanation: "Heat stress makes corals expel the algae living in their tissue, turning them white and leaving them starved.",
    },
    BankEntry {
        question: "What causes ocean acidification?",
        correct: "Seawater absorbing carbon dioxide from the atmosphere",
        distractors: [
            "Oil spills from tankers",
            "Acid rain falling on the open ocean",
            "Road salt washing into rivers",
        ],
        explanation: "The ocean absorbs roughly a quarter of human CO2 emissions, which forms carbonic acid and lowers seawater pH.",
    },
    BankEntry {
        question: "What is a marine \"dead zone\"?",
        correct: "An area with too little oxygen to support most marine life",
        distractors: [
            "A stretch of sea closed to all shipping",
            "A deep region that sunlight never reaches",
            "An area polluted only by floating plastic",
        ],
        explanation: "Nutrient runoff feeds algal blooms; as they decay, oxygen is used up and fish and other animals suffocate or leave.",
    },
];

/// The locally authored quiz, shuffled with the thread RNG
pub fn fallback_quiz() -> Vec<QuizQuestion> {
    fallback_quiz_with(&mut rand::thread_rng())
}

/// Shuffle question order and each question's choices (Fisher-Yates), then number 1..=5
pub fn fallback_quiz_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<QuizQuestion> {
    let mut entries: Vec<&BankEntry> = BANK.iter().collect();
    entries.shuffle(rng);

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut choices: Vec<&str> = std::iter::once(entry.correct)
                .chain(entry.distractors)
                .collect();
            choices.shuffle(rng);

            let correct_index = choices
                .iter()
                .position(|c| *c == entry.correct)
                .unwrap_or(0);

            QuizQuestion {
                id: i + 1,
                question: entry.question.to_string(),
                choices: choices.into_iter().map(String::from).collect(),
                correct_index,
                explanation: entry.explanation.to_string(),
            }
        })
        .collect()
}
