//! The presentation host: turns user actions into session transitions and
//! describes the resulting screen.

use std::{sync::Arc, time::Instant};

use tokio::sync::Mutex;

use crate::{
    config::QuizConfig,
    session::{Phase, QuizError, QuizSession, Verdict},
    source::{QuestionSource, SourceError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Render,
    StartQuiz,
    NextSession,
    RetrySession,
    SubmitAnswer {
        /// Index of the question the answer was given for, if known.
        question: Option<usize>,
        choice: String,
    },
    NextQuestion,
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::Render => "render",
            Action::StartQuiz => "start quiz",
            Action::NextSession => "next session",
            Action::RetrySession => "retry session",
            Action::SubmitAnswer { .. } => "submit answer",
            Action::NextQuestion => "next question",
        }
    }
}

/// A one-shot message shown above the screen it was produced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Correct,
    Incorrect { correct_answer: String },
    TimeUp,
    FetchFailed { reason: String },
    EmptyBatch,
    NotAccepting,
    LastQuestion,
    StaleAnswer,
    NotOffered { action: &'static str },
}

impl From<QuizError> for Notice {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::Source(SourceError::SourceUnavailable(e)) => Notice::FetchFailed {
                reason: e.to_string(),
            },
            QuizError::Source(SourceError::MalformedResponse(reason)) => {
                Notice::FetchFailed { reason }
            }
            QuizError::EmptyBatch => Notice::EmptyBatch,
            QuizError::NotActive => Notice::NotAccepting,
            QuizError::LastQuestion => Notice::LastQuestion,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub remaining_secs: u64,
    pub question_number: usize,
    pub questions_count: usize,
    pub session_number: u32,
    pub points: u32,
    pub points_attempted: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub index: usize,
    pub text: String,
    pub choices: Vec<String>,
    pub can_skip: bool,
    pub banner: Banner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryNext {
    NextSession,
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub session_number: u32,
    pub points: u32,
    pub total_possible: u32,
    pub next: SummaryNext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Question(QuestionView),
    Summary(SummaryView),
    Unavailable { session_number: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub notices: Vec<Notice>,
    pub view: View,
}

/// Owns the single quiz session of this process.
pub struct Quiz {
    config: QuizConfig,
    source: Arc<dyn QuestionSource>,
    session: Mutex<Option<QuizSession>>,
}

impl Quiz {
    pub fn new(config: QuizConfig, source: Arc<dyn QuestionSource>) -> Self {
        Self {
            config,
            source,
            session: Mutex::new(None),
        }
    }

    /// Applies one user action and describes the screen to render next.
    ///
    /// The session lock is held for the whole call, fetch included, so
    /// actions never interleave.
    pub async fn on_user_action(&self, action: Action) -> Screen {
        let mut slot = self.session.lock().await;
        let mut notices = Vec::new();

        let fresh = slot.is_none();
        let session = slot.get_or_insert_with(|| {
            QuizSession::new(self.config.question_request(), self.config.time_limit())
        });
        if fresh {
            tracing::info!("initializing quiz session");
            if action != Action::StartQuiz {
                if let Err(e) = session.start_quiz(self.source.as_ref()).await {
                    notices.push(e.into());
                }
            }
        }

        tracing::debug!("handling action: {}", action.name());

        if matches!(
            action,
            Action::Render | Action::SubmitAnswer { .. } | Action::NextQuestion
        ) && session.tick(Instant::now())
        {
            notices.push(Notice::TimeUp);
        }

        if let Some(notice) = self.apply(session, action).await {
            notices.push(notice);
        }

        Screen {
            notices,
            view: self.view(session, Instant::now()),
        }
    }

    async fn apply(&self, session: &mut QuizSession, action: Action) -> Option<Notice> {
        let source = self.source.as_ref();
        match action {
            Action::Render => None,
            Action::StartQuiz => session.start_quiz(source).await.err().map(Notice::from),
            Action::NextSession => {
                if session.phase() != Phase::SessionOver
                    || session.session_number() >= self.config.sessions.get()
                {
                    return Some(refused(&Action::NextSession));
                }
                session.next_session(source).await.err().map(Notice::from)
            }
            Action::RetrySession => {
                if session.phase() != Phase::Unavailable {
                    return Some(refused(&Action::RetrySession));
                }
                session.retry_session(source).await.err().map(Notice::from)
            }
            Action::SubmitAnswer { question, choice } => {
                if session.phase() == Phase::Active
                    && question.is_some_and(|idx| idx != session.current_index())
                {
                    tracing::warn!(
                        "answer for question {question:?} arrived while on question {}",
                        session.current_index()
                    );
                    return Some(Notice::StaleAnswer);
                }
                Some(match session.submit_answer(&choice) {
                    Ok(Verdict::Correct) => Notice::Correct,
                    Ok(Verdict::Incorrect { correct_answer }) => {
                        Notice::Incorrect { correct_answer }
                    }
                    Err(e) => e.into(),
                })
            }
            Action::NextQuestion => session.advance_without_answering().err().map(Notice::from),
        }
    }

    fn view(&self, session: &QuizSession, now: Instant) -> View {
        match session.phase() {
            Phase::Active => match session.current_question() {
                Some(question) => View::Question(QuestionView {
                    index: session.current_index(),
                    text: question.text.clone(),
                    choices: question.choices.clone(),
                    can_skip: session.has_next_question(),
                    banner: Banner {
                        remaining_secs: session.remaining(now).as_secs(),
                        question_number: session.current_index() + 1,
                        questions_count: session.questions().len(),
                        session_number: session.session_number(),
                        points: session.points(),
                        points_attempted: session.points_attempted(),
                    },
                }),
                None => View::Unavailable {
                    session_number: session.session_number(),
                },
            },
            Phase::SessionOver => View::Summary(SummaryView {
                session_number: session.session_number(),
                points: session.points(),
                total_possible: session.total_possible(),
                next: if session.session_number() < self.config.sessions.get() {
                    SummaryNext::NextSession
                } else {
                    SummaryNext::Restart
                },
            }),
            Phase::Unavailable => View::Unavailable {
                session_number: session.session_number(),
            },
        }
    }
}

fn refused(action: &Action) -> Notice {
    tracing::warn!("refused action: {}", action.name());
    Notice::NotOffered {
        action: action.name(),
    }
}
