use axum::{
    extract::{Form, State},
    routing::{get, post},
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    extractors::IsHtmx,
    names,
    quiz::Action,
    rejections::{AppError, ResultExt},
    views,
    views::quiz as quiz_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::ROOT_URL, get(quiz_page))
        .route(names::START_QUIZ_URL, post(start_quiz))
        .route(names::NEXT_SESSION_URL, post(next_session))
        .route(names::RETRY_SESSION_URL, post(retry_session))
        .route(names::SUBMIT_ANSWER_URL, post(submit_answer))
        .route(names::NEXT_QUESTION_URL, post(next_question))
}

#[derive(Deserialize)]
struct SubmitAnswerBody {
    #[serde(default)]
    choice: Option<String>,
    #[serde(default)]
    question: Option<String>,
}

async fn dispatch(state: &AppState, is_htmx: bool, action: Action) -> Markup {
    let screen = state.quiz.on_user_action(action).await;
    views::render(
        is_htmx,
        &quiz_views::title(&screen),
        quiz_views::screen(&screen),
    )
}

async fn quiz_page(IsHtmx(is_htmx): IsHtmx, State(state): State<AppState>) -> Markup {
    dispatch(&state, is_htmx, Action::Render).await
}

async fn start_quiz(IsHtmx(is_htmx): IsHtmx, State(state): State<AppState>) -> Markup {
    dispatch(&state, is_htmx, Action::StartQuiz).await
}

async fn next_session(IsHtmx(is_htmx): IsHtmx, State(state): State<AppState>) -> Markup {
    dispatch(&state, is_htmx, Action::NextSession).await
}

async fn retry_session(IsHtmx(is_htmx): IsHtmx, State(state): State<AppState>) -> Markup {
    dispatch(&state, is_htmx, Action::RetrySession).await
}

async fn next_question(IsHtmx(is_htmx): IsHtmx, State(state): State<AppState>) -> Markup {
    dispatch(&state, is_htmx, Action::NextQuestion).await
}

async fn submit_answer(
    IsHtmx(is_htmx): IsHtmx,
    State(state): State<AppState>,
    Form(body): Form<SubmitAnswerBody>,
) -> Result<Markup, AppError> {
    let Some(choice) = body.choice else {
        return Err(AppError::Input("no choice provided"));
    };

    let question = body
        .question
        .filter(|q| !q.is_empty())
        .map(|q| q.parse::<usize>())
        .transpose()
        .reject_input("failed to parse question index")?;

    tracing::debug!("received answer for question {question:?}: {choice:?}");

    Ok(dispatch(&state, is_htmx, Action::SubmitAnswer { question, choice }).await)
}
