use std::sync::Arc;

use clap::Parser;
use quizrush::{config::QuizConfig, names, source::OpenTrivia, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = names::DEFAULT_ADDRESS)]
    address: String,

    #[command(flatten)]
    quiz: QuizConfig,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,tower_http=info,quizrush=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    tracing::info!(
        "quiz: {} sessions of {} {} questions from category {}, {}s each",
        args.quiz.sessions,
        args.quiz.questions_per_session,
        args.quiz.difficulty,
        args.quiz.category,
        args.quiz.session_seconds
    );

    let source = Arc::new(OpenTrivia::new(args.quiz.source_url.clone()));
    let app = quizrush::router(AppState::new(args.quiz, source));

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on http://{address}");
    axum::serve(listener, app).await?;

    Ok(())
}
