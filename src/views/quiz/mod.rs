mod question;
mod summary;

pub use question::question;
pub use summary::{summary, unavailable};

use maud::{html, Markup};
use rust_i18n::t;

use crate::quiz::{Notice, Screen, View};

pub fn screen(screen: &Screen) -> Markup {
    html! {
        @for n in &screen.notices {
            (notice(n))
        }
        @match &screen.view {
            View::Question(view) => { (question(view)) }
            View::Summary(view) => { (summary(view)) }
            View::Unavailable { session_number } => { (unavailable(*session_number)) }
        }
    }
}

pub fn title(screen: &Screen) -> String {
    match screen.view {
        View::Question(_) => t!("title.question").to_string(),
        View::Summary(_) => t!("title.summary").to_string(),
        View::Unavailable { .. } => t!("title.unavailable").to_string(),
    }
}

fn notice(notice: &Notice) -> Markup {
    let (class, text) = match notice {
        Notice::Correct => ("notice notice-success", t!("notice.correct").to_string()),
        Notice::Incorrect { correct_answer } => (
            "notice notice-error",
            t!("notice.incorrect", answer = correct_answer).to_string(),
        ),
        Notice::TimeUp => ("notice notice-error", t!("notice.time_up").to_string()),
        Notice::FetchFailed { reason } => (
            "notice notice-error",
            t!("notice.fetch_failed", reason = reason).to_string(),
        ),
        Notice::EmptyBatch => ("notice notice-error", t!("notice.empty_batch").to_string()),
        Notice::NotAccepting => (
            "notice notice-warning",
            t!("notice.not_accepting").to_string(),
        ),
        Notice::LastQuestion => (
            "notice notice-warning",
            t!("notice.last_question").to_string(),
        ),
        Notice::StaleAnswer => (
            "notice notice-warning",
            t!("notice.stale_answer").to_string(),
        ),
        Notice::NotOffered { action } => (
            "notice notice-warning",
            t!("notice.not_offered", action = action).to_string(),
        ),
    };

    html! {
        div class=(class) role="status" { (text) }
    }
}
