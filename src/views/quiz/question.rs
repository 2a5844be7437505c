use maud::{html, Markup, PreEscaped};
use rust_i18n::t;

use crate::{
    names,
    quiz::{Banner, QuestionView},
    utils,
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Counts the banner clock down between server renders.
const COUNTDOWN_JS: &str = "(function(){var e=document.getElementById('time-remaining');if(!e)return;var s=parseInt(e.dataset.seconds,10);var t=setInterval(function(){s=Math.max(0,s-1);e.textContent=String(Math.floor(s/60)).padStart(2,'0')+':'+String(s%60).padStart(2,'0');if(s===0)clearInterval(t);},1000);})();";

pub fn question(view: &QuestionView) -> Markup {
    html! {
        article.question {
            div.timestamp { (chrono::Local::now().format(TIMESTAMP_FORMAT)) }
            h3 { (view.text) }

            form #question-form
                 hx-post=(names::SUBMIT_ANSWER_URL)
                 hx-target="main"
                 hx-swap="innerHTML" {
                input type="hidden" name="question" value=(view.index);
                fieldset {
                    legend { (t!("quiz.select_answer")) }
                    @for (i, choice) in view.choices.iter().enumerate() {
                        label {
                            input type="radio" name="choice" value=(choice) checked[i == 0];
                            (choice)
                        }
                    }
                }
                div.actions {
                    input type="submit" value=(t!("quiz.submit_answer"));
                    button type="button"
                           class="secondary"
                           hx-post=(names::NEXT_QUESTION_URL)
                           hx-target="main"
                           hx-swap="innerHTML"
                           disabled[!view.can_skip] {
                        (t!("quiz.next_question"))
                    }
                }
            }
        }
        (banner(&view.banner))
    }
}

fn banner(banner: &Banner) -> Markup {
    html! {
        div.banner {
            (t!("banner.time_remaining")) " "
            span #time-remaining data-seconds=(banner.remaining_secs) {
                (utils::format_clock(banner.remaining_secs))
            }
            " | "
            (t!("banner.question", number = banner.question_number, count = banner.questions_count))
            " | "
            (t!("banner.session", number = banner.session_number))
            " | "
            (t!("banner.points", points = banner.points))
            " | "
            (t!("banner.attempted", points = banner.points_attempted))
        }
        // Re-render once the budget is spent so the timeout shows without a click.
        div hx-get=(names::ROOT_URL)
            hx-trigger=(format!("load delay:{}s", banner.remaining_secs + 1))
            hx-target="main"
            hx-swap="innerHTML" {}
        script { (PreEscaped(COUNTDOWN_JS)) }
    }
}
