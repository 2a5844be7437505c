use std::{num::NonZeroU32, time::Duration};

use crate::{models::Difficulty, names, source::QuestionRequest};

/// Quiz settings, read from flags or the environment.
#[derive(clap::Args, Debug, Clone)]
pub struct QuizConfig {
    /// Open Trivia compatible endpoint the questions are fetched from.
    #[arg(long, env = "TRIVIA_SOURCE_URL", default_value = names::OPEN_TRIVIA_URL)]
    pub source_url: String,

    /// Trivia category identifier.
    #[arg(long, env = "TRIVIA_CATEGORY", default_value = names::DEFAULT_CATEGORY)]
    pub category: String,

    #[arg(long, env = "TRIVIA_DIFFICULTY", value_enum, default_value_t = Difficulty::Medium)]
    pub difficulty: Difficulty,

    /// Questions fetched for every session.
    #[arg(long, env, default_value_t = names::DEFAULT_QUESTIONS_PER_SESSION)]
    pub questions_per_session: NonZeroU32,

    /// Number of sessions before the quiz is complete.
    #[arg(long, env, default_value_t = names::DEFAULT_SESSIONS)]
    pub sessions: NonZeroU32,

    /// Time budget of a single session, in seconds.
    #[arg(long, env, default_value_t = names::DEFAULT_SESSION_SECONDS)]
    pub session_seconds: u64,
}

impl QuizConfig {
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.session_seconds)
    }

    pub fn question_request(&self) -> QuestionRequest {
        QuestionRequest {
            category: self.category.clone(),
            difficulty: self.difficulty,
            amount: self.questions_per_session,
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            source_url: names::OPEN_TRIVIA_URL.to_string(),
            category: names::DEFAULT_CATEGORY.to_string(),
            difficulty: Difficulty::default(),
            questions_per_session: names::DEFAULT_QUESTIONS_PER_SESSION,
            sessions: names::DEFAULT_SESSIONS,
            session_seconds: names::DEFAULT_SESSION_SECONDS,
        }
    }
}
