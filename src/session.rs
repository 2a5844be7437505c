//! The quiz state machine.
//!
//! A [`QuizSession`] walks one batch of questions at a time. It owns no
//! timer: the host calls [`QuizSession::tick`] whenever it renders, and the
//! session ends the round once the time budget is spent.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::{
    models::{Question, Questions},
    names,
    source::{QuestionRequest, QuestionSource, SourceError},
};

#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("the question source returned no questions")]
    EmptyBatch,

    #[error("the session is not accepting answers")]
    NotActive,

    #[error("already at the last question")]
    LastQuestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting answers. The batch is never empty here.
    Active,
    /// Between sessions, showing the summary.
    SessionOver,
    /// The last fetch failed or came back empty.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { correct_answer: String },
}

pub struct QuizSession {
    request: QuestionRequest,
    time_limit: Duration,
    session_number: u32,
    current_question: usize,
    points: u32,
    answered: usize,
    phase: Phase,
    questions: Questions,
    started_at: Instant,
}

impl QuizSession {
    /// Creates an idle session with no batch. Call [`QuizSession::start_quiz`]
    /// to fetch the first one.
    pub fn new(request: QuestionRequest, time_limit: Duration) -> Self {
        Self {
            request,
            time_limit,
            session_number: 1,
            current_question: 0,
            points: 0,
            answered: 0,
            phase: Phase::Unavailable,
            questions: Vec::new(),
            started_at: Instant::now(),
        }
    }

    pub async fn start_quiz(&mut self, source: &dyn QuestionSource) -> Result<(), QuizError> {
        self.load(1, source).await
    }

    pub async fn next_session(&mut self, source: &dyn QuestionSource) -> Result<(), QuizError> {
        self.load(self.session_number + 1, source).await
    }

    /// Fetches a fresh batch for the current session number.
    pub async fn retry_session(&mut self, source: &dyn QuestionSource) -> Result<(), QuizError> {
        self.load(self.session_number, source).await
    }

    async fn load(
        &mut self,
        session_number: u32,
        source: &dyn QuestionSource,
    ) -> Result<(), QuizError> {
        let fetched = source.fetch_questions(&self.request).await;

        self.session_number = session_number;
        self.current_question = 0;
        self.points = 0;
        self.answered = 0;
        self.started_at = Instant::now();

        match fetched {
            Ok(batch) if batch.is_empty() => {
                tracing::warn!("session {session_number}: source returned an empty batch");
                self.questions.clear();
                self.phase = Phase::Unavailable;
                Err(QuizError::EmptyBatch)
            }
            Ok(batch) => {
                tracing::info!(
                    "session {session_number} started with {} questions",
                    batch.len()
                );
                self.questions = batch;
                self.phase = Phase::Active;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("session {session_number}: could not fetch questions: {e}");
                self.questions.clear();
                self.phase = Phase::Unavailable;
                Err(e.into())
            }
        }
    }

    pub fn submit_answer(&mut self, choice: &str) -> Result<Verdict, QuizError> {
        let question = self.current_question().ok_or(QuizError::NotActive)?;

        let verdict = if question.is_correct(choice) {
            Verdict::Correct
        } else {
            Verdict::Incorrect {
                correct_answer: question.correct_answer.clone(),
            }
        };

        if verdict == Verdict::Correct {
            self.points += names::POINTS_PER_QUESTION;
        }
        self.answered += 1;

        if self.current_question + 1 < self.questions.len() {
            self.current_question += 1;
        } else {
            tracing::info!(
                "session {} over, scored {}/{}",
                self.session_number,
                self.points,
                self.total_possible()
            );
            self.phase = Phase::SessionOver;
        }

        Ok(verdict)
    }

    /// Skips to the next question. Never ends the session, even when
    /// standing on the last question.
    pub fn advance_without_answering(&mut self) -> Result<(), QuizError> {
        if self.phase != Phase::Active {
            return Err(QuizError::NotActive);
        }
        if !self.has_next_question() {
            return Err(QuizError::LastQuestion);
        }
        self.current_question += 1;
        Ok(())
    }

    /// Ends an active session whose time budget is spent. Returns `true` only
    /// on the call that forced the transition.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Active || self.elapsed(now) < self.time_limit {
            return false;
        }

        tracing::info!(
            "session {} timed out at question {}",
            self.session_number,
            self.current_question + 1
        );
        self.phase = Phase::SessionOver;
        true
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Active => self.questions.get(self.current_question),
            Phase::SessionOver | Phase::Unavailable => None,
        }
    }

    pub fn has_next_question(&self) -> bool {
        self.current_question + 1 < self.questions.len()
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.time_limit.saturating_sub(self.elapsed(now))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_session_over(&self) -> bool {
        self.phase == Phase::SessionOver
    }

    pub fn session_number(&self) -> u32 {
        self.session_number
    }

    pub fn current_index(&self) -> usize {
        self.current_question
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn answered_count(&self) -> usize {
        self.answered
    }

    pub fn points_attempted(&self) -> u32 {
        self.answered as u32 * names::POINTS_PER_QUESTION
    }

    pub fn total_possible(&self) -> u32 {
        self.questions.len() as u32 * names::POINTS_PER_QUESTION
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }
}
