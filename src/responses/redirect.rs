// responses/redirect.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Send the browser to `location` after a form post.
///
/// HTMX requests get `HX-Redirect` (it does not follow 3xx for page loads),
/// plain forms get `303 See Other`.
pub fn redirect(location: &str, htmx: bool) -> ResultResp {
    let builder = if htmx {
        ResponseBuilder::new()
            .status(200)
            .header("HX-Redirect", location)
    } else {
        ResponseBuilder::new().status(303).header("Location", location)
    };

    builder
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
