use crate::templates::components::post_button;
use crate::templates::{with_listing, PageCtx};
use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, ctx: &PageCtx, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(ctx.lang.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · StayEase" }
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) defer {};
            }
            body {
                (navbar(ctx))
                main { (content) }
                // dialogs are swapped in here
                div id="modal" {}
                (footer(ctx))
            }
        }
    }
}

fn navbar(ctx: &PageCtx) -> Markup {
    let t = ctx.t();
    let auth_url = with_listing("/dialogs/auth", ctx.property_id);

    html! {
        header.navbar {
            (post_button("/reset", "StayEase", "logo"))

            button.search-pill type="button" hx-get="/dialogs/search" hx-target="#modal" {
                span { (t.anywhere) }
                span.divider {}
                span.hide-sm { (t.any_week) }
                span.divider {}
                span.hide-sm { (t.add_guests) }
                span aria-hidden="true" { "🔍" }
            }

            div.nav-actions {
                span.hide-sm { (t.your_home) }
                button type="button"
                    aria-label="Language"
                    hx-get=(with_listing("/dialogs/language", ctx.property_id))
                    hx-target="#modal"
                { "🌐" }

                div.menu {
                    button type="button" aria-haspopup="true" { "☰ 👤" }
                    ul {
                        @if !ctx.logged_in {
                            li { button type="button" hx-get=(auth_url) hx-target="#modal" { (t.signup) } }
                            li { button type="button" hx-get=(auth_url) hx-target="#modal" { (t.login) } }
                        }
                        li { button type="button" { (t.your_home) } }
                        li { button type="button" hx-get="/dialogs/help" hx-target="#modal" { (t.help_center) } }
                    }
                }
            }
        }
    }
}

fn footer(ctx: &PageCtx) -> Markup {
    html! {
        footer.site {
            div {
                "© 2025 StayEase ♥ · Privacy · Terms"
            }
            div.right {
                span { "$ USD" }
                span { (ctx.lang.footer_label()) }
            }
        }
    }
}
