use maud::{html, Markup, DOCTYPE};

/// Standalone error page. Does not depend on session state.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) " · StayEase" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                div.empty-state {
                    div.emoji { "🧭" }
                    h1 { "Error " (status) }
                    p { (message) }
                    p { a href="/" { "← Back to home" } }
                }
            }
        }
    }
}
