use maud::{html, Markup};

pub mod banners;
pub mod card;
pub mod category_bar;
pub mod dialog;
pub mod error;

pub use banners::{ai_banner, classic_banner, empty_state};
pub use card::listing_card;
pub use category_bar::category_bar;
pub use dialog::dialog_frame;
pub use error::error_page;

/// Submit button of a one-field POST form.
pub fn post_button(action: &str, label: &str, class: &str) -> Markup {
    html! {
        form method="post" action=(action) {
            button type="submit" class=(class) { (label) }
        }
    }
}
