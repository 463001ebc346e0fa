pub mod asset;
pub mod errors;
pub mod html;
pub mod redirect;

pub use crate::errors::ResultResp;
pub use asset::stylesheet_response;
pub use errors::html_error_response;
pub use html::{empty_response, html_response};
pub use redirect::redirect;
