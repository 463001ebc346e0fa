//! HTMX fragments swapped into `#modal`.

pub mod account;
pub mod listing;
pub mod search;

pub use account::{auth_dialog, help_dialog, help_thanks, language_dialog};
pub use listing::{gallery_dialog, share_dialog};
pub use search::{search_dialog, SearchTab};
