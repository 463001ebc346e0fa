use crate::ai::UNAVAILABLE_SUMMARY;
use crate::templates::components::dialog_frame;
use crate::templates::PageCtx;
use maud::{html, Markup};

/// Region shortcuts of the classic tab. An empty value means no location text.
const REGION_SHORTCUTS: [(&str, &str); 7] = [
    ("I'm flexible", ""),
    ("United States", "United States"),
    ("Italy", "Italy"),
    ("France", "France"),
    ("Japan", "Japan"),
    ("Brazil", "Brazil"),
    ("India", "India"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchTab {
    #[default]
    Ai,
    Classic,
}

impl SearchTab {
    /// Unknown values fall back to the AI tab.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("classic") => SearchTab::Classic,
            _ => SearchTab::Ai,
        }
    }
}

/// `ai_ready` is false when no AI credential is configured.
pub fn search_dialog(ctx: &PageCtx, tab: SearchTab, ai_ready: bool) -> Markup {
    let body = html! {
        div.tabs {
            button type="button" .active[tab == SearchTab::Ai]
                hx-get="/dialogs/search?tab=ai" hx-target="#modal"
            { "✨ StayEase Genius" }
            button type="button" .active[tab == SearchTab::Classic]
                hx-get="/dialogs/search?tab=classic" hx-target="#modal"
            { "Classic Search" }
        }
        @match tab {
            SearchTab::Ai => { (ai_tab(ai_ready)) }
            SearchTab::Classic => { (classic_tab(ctx)) }
        }
    };
    dialog_frame("Search", true, body)
}

fn ai_tab(ai_ready: bool) -> Markup {
    html! {
        form.genius method="post" action="/search/ai"
            hx-post="/search/ai" hx-disabled-elt="#ai-submit"
        {
            h2 { "Genius Search" }
            p { "Tell us your dream..." }
            @if !ai_ready {
                p { small { (UNAVAILABLE_SUMMARY) } }
            }
            textarea name="query" required
                placeholder="e.g., A romantic cabin in Kyoto with a private onsen..." {}
            p {
                button.outline #ai-submit type="submit" { "Search ➤" }
            }
        }
    }
}

fn classic_tab(ctx: &PageCtx) -> Markup {
    let t = ctx.t();
    html! {
        form method="post" action="/search/classic" hx-post="/search/classic" {
            label for="location" { (t.search_where) }
            input #location type="text" name="location" placeholder=(t.search_destinations);

            h3 { (t.select_region) }
            div.regions {
                @for (label, value) in REGION_SHORTCUTS {
                    button type="submit" name="region" value=(value) { (label) }
                }
            }

            h3 { (t.search_who) }
            (counter("adults", t.adults, t.ages_13, 1, 1))
            (counter("children", t.children, t.ages_2_12, 0, 0))
            (counter("pets", t.pets, t.bringing_service_animal, 0, 0))

            p { button.primary type="submit" { "🔍 Search" } }
        }
    }
}

fn counter(name: &str, label: &str, hint: &str, min: u32, value: u32) -> Markup {
    html! {
        div.counter {
            div {
                strong { (label) }
                br;
                small { (hint) }
            }
            input type="number" name=(name) min=(min) value=(value) aria-label=(label);
        }
    }
}
