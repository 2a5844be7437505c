//! Question bank access.
//!
//! [`QuestionSource`] is the seam between the quiz and wherever questions
//! come from. [`OpenTrivia`] talks to an Open Trivia Database compatible
//! endpoint over HTTP.

use std::num::NonZeroU32;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    models::{Difficulty, Question, Questions},
    names,
};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("question source unavailable: {0}")]
    SourceUnavailable(#[from] reqwest::Error),

    #[error("malformed response from question source: {0}")]
    MalformedResponse(String),
}

/// Parameters of one batch fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRequest {
    pub category: String,
    pub difficulty: Difficulty,
    pub amount: NonZeroU32,
}

#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch_questions(&self, request: &QuestionRequest) -> Result<Questions, SourceError>;
}

#[derive(Deserialize)]
struct TriviaResponse {
    response_code: i64,
    results: Option<Vec<TriviaQuestion>>,
}

#[derive(Deserialize)]
struct TriviaQuestion {
    question: String,
    incorrect_answers: Vec<String>,
    correct_answer: String,
}

/// HTTP client for the Open Trivia Database API.
#[derive(Clone)]
pub struct OpenTrivia {
    client: reqwest::Client,
    url: String,
}

impl OpenTrivia {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl Default for OpenTrivia {
    fn default() -> Self {
        Self::new(names::OPEN_TRIVIA_URL)
    }
}

#[async_trait]
impl QuestionSource for OpenTrivia {
    async fn fetch_questions(&self, request: &QuestionRequest) -> Result<Questions, SourceError> {
        tracing::debug!(
            "fetching {} {} questions from category {}",
            request.amount,
            request.difficulty,
            request.category
        );

        let amount = request.amount.to_string();
        let resp = self
            .client
            .get(&self.url)
            .query(&[
                ("amount", amount.as_str()),
                ("category", request.category.as_str()),
                ("difficulty", request.difficulty.as_str()),
                ("type", names::QUESTION_TYPE),
                ("encode", names::QUESTION_ENCODING),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = resp.bytes().await?;
        let questions = parse_response(&body)?;

        tracing::info!("fetched {} questions", questions.len());
        Ok(questions)
    }
}

fn parse_response(body: &[u8]) -> Result<Questions, SourceError> {
    let data: TriviaResponse = serde_json::from_slice(body)
        .map_err(|e| SourceError::MalformedResponse(format!("invalid payload: {e}")))?;

    let Some(results) = data.results else {
        return Err(SourceError::MalformedResponse(
            "payload has no results".to_string(),
        ));
    };

    if data.response_code != 0 {
        return Err(SourceError::MalformedResponse(format!(
            "response code {} ({})",
            data.response_code,
            describe_response_code(data.response_code)
        )));
    }

    results.into_iter().map(decode_question).collect()
}

fn decode_question(item: TriviaQuestion) -> Result<Question, SourceError> {
    let incorrect_answers = item
        .incorrect_answers
        .iter()
        .map(|answer| decode(answer))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Question::new(
        decode(&item.question)?,
        incorrect_answers,
        decode(&item.correct_answer)?,
    ))
}

fn decode(value: &str) -> Result<String, SourceError> {
    urlencoding::decode(value)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| SourceError::MalformedResponse(format!("undecodable field {value:?}: {e}")))
}

fn describe_response_code(code: i64) -> &'static str {
    match code {
        1 => "not enough questions for the query",
        2 => "invalid parameter",
        3 => "session token not found",
        4 => "session token exhausted",
        5 => "rate limited",
        _ => "unknown",
    }
}
