pub mod components;
pub mod dialogs;
pub mod layouts;
pub mod pages;

use crate::i18n::{Language, Translations};
use crate::share::{encode_component, DEEP_LINK_PARAM};

// Re-exports for convenience
pub use layouts::desktop::desktop_layout;

/// Per-request bits every page needs.
#[derive(Debug, Clone, Copy)]
pub struct PageCtx<'a> {
    pub lang: Language,
    pub logged_in: bool,
    /// Listing on screen, if any. Forms use it to come back to the same page.
    pub property_id: Option<&'a str>,
}

impl<'a> PageCtx<'a> {
    pub fn t(&self) -> &'static Translations {
        self.lang.strings()
    }
}

/// `path` with the listing id appended as the deep-link parameter.
pub fn with_listing(path: &str, property_id: Option<&str>) -> String {
    match property_id {
        Some(id) => format!("{path}?{DEEP_LINK_PARAM}={}", encode_component(id)),
        None => path.to_string(),
    }
}
