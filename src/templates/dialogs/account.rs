use crate::i18n::Language;
use crate::templates::components::dialog_frame;
use crate::templates::PageCtx;
use maud::{html, Markup};

const COUNTRY_CODES: [(&str, &str); 5] = [
    ("+1", "United States (+1)"),
    ("+91", "India (+91)"),
    ("+44", "United Kingdom (+44)"),
    ("+33", "France (+33)"),
    ("+81", "Japan (+81)"),
];

/// Simulated phone login. With a listing id, logging in also saves it.
pub fn auth_dialog(ctx: &PageCtx) -> Markup {
    let t = ctx.t();
    let title = format!("{} / {}", t.login, t.signup);

    let body = html! {
        h3 { (t.welcome) }
        form method="post" action="/auth/login" hx-post="/auth/login" {
            @if let Some(id) = ctx.property_id {
                input type="hidden" name="propertyId" value=(id);
            }
            label for="country" { "Country/Region" }
            select #country name="country_code" {
                @for (code, label) in COUNTRY_CODES {
                    option value=(code) { (label) }
                }
            }
            label for="phone" { (t.phone_placeholder) }
            input #phone type="tel" name="phone" required placeholder=(t.phone_placeholder);
            p { button.primary type="submit" { (t.continue_label) } }
        }
    };
    dialog_frame(&title, false, body)
}

pub fn help_dialog(ctx: &PageCtx) -> Markup {
    let body = html! {
        p { "We are here to assist you." }
        form hx-post="/help" hx-target="#modal" method="post" action="/help" {
            label for="help-name" { "Full Name" }
            input #help-name type="text" name="name" required placeholder="Enter your name";
            label for="help-phone" { "Mobile Number" }
            input #help-phone type="tel" name="phone" required placeholder="+1 (555) 000-0000";
            label for="help-unit" { "Room Number (if applicable)" }
            input #help-unit type="text" name="unit" placeholder="e.g. 104";
            label for="help-message" { "Describe your issue" }
            textarea #help-message name="message" required placeholder="How can we help?" {}
            p { button.primary type="submit" { (ctx.t().continue_label) } }
        }
    };
    dialog_frame(ctx.t().help_center, false, body)
}

pub fn help_thanks(ctx: &PageCtx) -> Markup {
    let body = html! {
        div.empty-state {
            div.emoji { "✅" }
            h2 { "Request Received!" }
            p { "Our support team will contact you shortly." }
        }
    };
    dialog_frame(ctx.t().help_center, false, body)
}

pub fn language_dialog(ctx: &PageCtx) -> Markup {
    let body = html! {
        h3 { "Suggested languages" }
        form.languages method="post" action="/language" {
            @if let Some(id) = ctx.property_id {
                input type="hidden" name="propertyId" value=(id);
            }
            @for lang in Language::ALL {
                button type="submit" name="language" value=(lang.code())
                    .active[lang == ctx.lang]
                {
                    strong { (lang.label()) }
                    br;
                    small { (lang.region()) }
                }
            }
        }
    };
    dialog_frame("Language and region", true, body)
}
