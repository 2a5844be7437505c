mod common;

use std::num::NonZeroU32;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::{app, question, send, two_questions, FakeSource};
use quizrush::config::QuizConfig;
use tower::ServiceExt;

#[tokio::test]
async fn direct_navigation_renders_full_page_with_first_question() {
    let app = app(FakeSource::new(two_questions()), QuizConfig::default());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .expect("request build should succeed");
    let resp = app.oneshot(req).await.expect("router should respond");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body = String::from_utf8(bytes.to_vec()).expect("body should be utf-8");

    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("First question"));
    assert!(body.contains("Question Attempting: 1/2"));
    assert!(body.contains("Session: 1"));
    assert!(body.contains("Marks Obtained: 0"));
    assert!(body.contains(r#"value="A""#));
}

#[tokio::test]
async fn answering_a_whole_session_shows_summary() {
    let app = app(FakeSource::new(two_questions()), QuizConfig::default());

    let (status, body) = send(&app, Method::POST, "/submit-answer", "question=0&choice=A").await;
    assert_eq!(status, 200);
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Correct! You get 10 points."));
    assert!(body.contains("Second question"));
    assert!(body.contains("Marks Obtained: 10"));
    assert!(body.contains("Marks Attempted: 10"));

    let (status, body) = send(&app, Method::POST, "/submit-answer", "question=1&choice=X").await;
    assert_eq!(status, 200);
    assert!(body.contains("Incorrect! The correct answer was: B"));
    assert!(body.contains("Session 1 completed! Your score: 10 out of 20"));
    assert!(body.contains("Start Next Session"));
    assert!(!body.contains("Restart Quiz"));

    let (_, body) = send(&app, Method::POST, "/next-session", "").await;
    assert!(body.contains("First question"));
    assert!(body.contains("Session: 2"));
    assert!(body.contains("Marks Attempted: 0"));
}

#[tokio::test]
async fn next_question_skips_without_scoring() {
    let app = app(FakeSource::new(two_questions()), QuizConfig::default());

    let (_, body) = send(&app, Method::POST, "/next-question", "").await;
    assert!(body.contains("Second question"));
    assert!(body.contains("Question Attempting: 2/2"));
    assert!(body.contains("Marks Attempted: 0"));

    let (_, body) = send(&app, Method::POST, "/next-question", "").await;
    assert!(body.contains("You are already on the last question."));
    assert!(body.contains("Second question"));
}

#[tokio::test]
async fn final_session_offers_restart_only() {
    let config = QuizConfig {
        sessions: NonZeroU32::new(1).expect("non-zero"),
        ..QuizConfig::default()
    };
    let app = app(FakeSource::new(vec![question("Only question", "A")]), config);

    let (_, body) = send(&app, Method::POST, "/submit-answer", "question=0&choice=A").await;
    assert!(body.contains("Session 1 completed! Your score: 10 out of 10"));
    assert!(body.contains("Restart Quiz"));
    assert!(!body.contains("Start Next Session"));

    let (_, body) = send(&app, Method::POST, "/next-session", "").await;
    assert!(body.contains("is not available right now"));

    let (_, body) = send(&app, Method::POST, "/start-quiz", "").await;
    assert!(body.contains("Only question"));
    assert!(body.contains("Session: 1"));
}

#[tokio::test]
async fn failed_fetch_surfaces_error_and_can_be_retried() {
    let app = app(
        FakeSource::failing_first(two_questions(), 1),
        QuizConfig::default(),
    );

    let (status, body) = send(&app, Method::GET, "/", "").await;
    assert_eq!(status, 200);
    assert!(body.contains("Failed to fetch questions: response code 1"));
    assert!(body.contains("Try Again"));
    assert!(!body.contains("Submit Answer"));

    let (_, body) = send(&app, Method::POST, "/submit-answer", "choice=A").await;
    assert!(body.contains("This session is not accepting answers."));

    let (_, body) = send(&app, Method::POST, "/retry-session", "").await;
    assert!(body.contains("First question"));
}

#[tokio::test]
async fn expired_session_ends_on_render() {
    let config = QuizConfig {
        session_seconds: 0,
        ..QuizConfig::default()
    };
    let app = app(FakeSource::new(two_questions()), config);

    let (_, body) = send(&app, Method::GET, "/", "").await;
    assert!(body.contains("up! The session is over."));
    assert!(body.contains("Session 1 completed! Your score: 0 out of 20"));
}

#[tokio::test]
async fn post_without_htmx_header_is_forbidden() {
    let app = app(FakeSource::new(two_questions()), QuizConfig::default());

    for uri in [
        "/start-quiz",
        "/next-session",
        "/retry-session",
        "/submit-answer",
        "/next-question",
    ] {
        let req = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("choice=A"))
            .expect("request build should succeed");
        let resp = app
            .clone()
            .oneshot(req)
            .await
            .expect("router should respond");

        assert_eq!(
            resp.status(),
            StatusCode::FORBIDDEN,
            "expected FORBIDDEN for {uri}",
        );
    }
}

#[tokio::test]
async fn malformed_answers_are_bad_requests() {
    let app = app(FakeSource::new(two_questions()), QuizConfig::default());

    let (status, _) = send(&app, Method::POST, "/submit-answer", "question=0").await;
    assert_eq!(status, 400);

    let (status, _) = send(&app, Method::POST, "/submit-answer", "question=first&choice=A").await;
    assert_eq!(status, 400);

    let (_, body) = send(&app, Method::GET, "/", "").await;
    assert!(body.contains("Marks Attempted: 0"));
}

#[tokio::test]
async fn unknown_paths_and_static_assets() {
    let app = app(FakeSource::new(two_questions()), QuizConfig::default());

    let (status, body) = send(&app, Method::GET, "/nope", "").await;
    assert_eq!(status, 404);
    assert!(body.contains("Page not found"));

    let (status, _) = send(&app, Method::GET, "/static/missing.css", "").await;
    assert_eq!(status, 404);

    let req = Request::builder()
        .uri("/static/index.css")
        .body(Body::empty())
        .expect("request build should succeed");
    let resp = app.oneshot(req).await.expect("router should respond");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").map(|v| v.as_bytes()),
        Some("text/css".as_bytes())
    );
}
