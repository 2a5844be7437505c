use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::{names, utils};

const HTMX_URL: &str = "https://unpkg.com/htmx.org@2.0.4";

fn css() -> Markup {
    html! {
        link rel="stylesheet" href=(format!("{}/index.css", names::STATIC_URL));
    }
}

fn js() -> Markup {
    html! {
        script src=(HTMX_URL) {}
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href=(names::ROOT_URL) {
                            strong { (t!("app.name")) }
                        }
                    }
                }
                ul {
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (js())

            title { (format!("{title} - {}", t!("app.name"))) }
        }

        body."container" {
            (header())
            (main(body))
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - " (t!("app.name")) }
        (body)
    }
}

/// Full page for direct navigation, fragment for htmx swaps.
pub fn render(is_htmx: bool, title: &str, body: Markup) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body)
    }
}
