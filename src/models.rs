use serde::{Deserialize, Serialize};

pub type Questions = Vec<Question>;

/// A multiple-choice question as presented to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    /// Incorrect answers first, correct answer last, in the order received.
    pub choices: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn new(text: String, incorrect_answers: Vec<String>, correct_answer: String) -> Self {
        let mut choices = incorrect_answers;
        choices.push(correct_answer.clone());
        Self {
            text,
            choices,
            correct_answer,
        }
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
