use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    names,
    quiz::{SummaryNext, SummaryView},
};

pub fn summary(view: &SummaryView) -> Markup {
    html! {
        article.summary {
            h2 {
                (t!("summary.completed",
                    session = view.session_number,
                    points = view.points,
                    total = view.total_possible))
            }
            @match view.next {
                SummaryNext::NextSession => {
                    button hx-post=(names::NEXT_SESSION_URL)
                           hx-target="main"
                           hx-swap="innerHTML" {
                        (t!("summary.next_session"))
                    }
                }
                SummaryNext::Restart => {
                    p { (t!("summary.all_completed")) }
                    (restart_button())
                }
            }
        }
    }
}

pub fn unavailable(session_number: u32) -> Markup {
    html! {
        article.unavailable {
            h2 { (t!("unavailable.title", session = session_number)) }
            p { (t!("unavailable.hint")) }
            div.actions {
                button hx-post=(names::RETRY_SESSION_URL)
                       hx-target="main"
                       hx-swap="innerHTML" {
                    (t!("unavailable.retry"))
                }
                (restart_button())
            }
        }
    }
}

fn restart_button() -> Markup {
    html! {
        button.secondary hx-post=(names::START_QUIZ_URL)
                         hx-target="main"
                         hx-swap="innerHTML" {
            (t!("quiz.restart"))
        }
    }
}
