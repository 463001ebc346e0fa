// src/share.rs
use crate::domain::Listing;
use url::Url;

pub const DEEP_LINK_PARAM: &str = "propertyId";

/// Relative link that opens a listing's details page.
pub fn details_path(listing_id: &str) -> String {
    format!("/?{DEEP_LINK_PARAM}={}", encode_component(listing_id))
}

/// Percent-encode like `encodeURIComponent`: spaces become `%20`, not `+`.
pub fn encode_component(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Everything the share dialog offers for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub url: String,
    pub email: String,
    pub whatsapp: String,
    pub facebook: String,
}

impl ShareLinks {
    pub fn new(public_url: &Url, listing: &Listing) -> Self {
        let mut deep_link = public_url.clone();
        deep_link.set_fragment(None);
        deep_link
            .query_pairs_mut()
            .clear()
            .append_pair(DEEP_LINK_PARAM, &listing.id);
        let url = deep_link.to_string();

        let text = format!("Check out {} on StayEase!", listing.title);

        Self {
            email: format!(
                "mailto:?subject={}&body={}",
                encode_component(&listing.title),
                encode_component(&format!("{text}\n\n{url}"))
            ),
            whatsapp: format!(
                "https://wa.me/?text={}",
                encode_component(&format!("{text} {url}"))
            ),
            facebook: format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                encode_component(&url)
            ),
            url,
        }
    }
}
