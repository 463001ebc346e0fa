use crate::domain::booking::Stay;
use crate::domain::Listing;
use crate::i18n::Translations;
use crate::share::details_path;
use maud::{html, Markup};

pub fn listing_card(listing: &Listing, stay: &Stay, t: &Translations) -> Markup {
    html! {
        a.card href=(details_path(&listing.id)) {
            img src=(listing.image_url) alt=(listing.title) loading="lazy";
            div.row {
                span { (listing.location) }
                span { "★ " (listing.rating) }
            }
            div.meta { (listing.kind) " • " (listing.host_name) }
            div.meta { (stay.short_range()) }
            div {
                strong { "$" (listing.price_per_night) }
                " " (t.night)
            }
        }
    }
}
