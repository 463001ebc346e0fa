use crate::domain::ClassicCriteria;
use crate::i18n::Translations;
use crate::templates::components::post_button;
use maud::{html, Markup};

fn clear_button() -> Markup {
    html! {
        form method="post" action="/filters/clear" {
            button.close type="submit" aria-label="Clear filters" { "✕" }
        }
    }
}

pub fn ai_banner(summary: &str) -> Markup {
    html! {
        div.banner.ai.fade-in {
            span aria-hidden="true" { "✨" }
            div {
                h3 { "StayEase Genius Found Matches" }
                p { (summary) }
            }
            (clear_button())
        }
    }
}

pub fn classic_banner(criteria: &ClassicCriteria, t: &Translations) -> Markup {
    html! {
        div.banner.classic.fade-in {
            span aria-hidden="true" { "🔍" }
            div {
                h3 { "Searching for '" (criteria.location_text) "'" }
                p { (criteria.guests) " " (t.guests) }
            }
            (clear_button())
        }
    }
}

/// Shown when a filter matches nothing.
pub fn empty_state() -> Markup {
    html! {
        div.empty-state {
            div.emoji { "🤔" }
            h2 { "No exact matches found" }
            p { "Try adjusting your search or filters." }
            (post_button("/filters/clear", "Clear all filters", "outline"))
        }
    }
}
