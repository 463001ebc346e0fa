// templates/pages/details.rs

use crate::domain::booking::{Stay, StayQuote};
use crate::domain::Listing;
use crate::templates::{desktop_layout, with_listing, PageCtx};
use maud::{html, Markup};

/// Everything the details page renders for one listing.
pub struct DetailsVm<'a> {
    pub listing: &'a Listing,
    /// Primary image first, then the derived stock images.
    pub gallery: Vec<String>,
    pub stay: Stay,
    pub quote: StayQuote,
    pub saved: bool,
    pub reserved: bool,
}

pub fn details_page(ctx: &PageCtx, vm: &DetailsVm) -> Markup {
    let t = ctx.t();
    let listing = vm.listing;
    let gallery_url = with_listing("/dialogs/gallery", Some(&listing.id));

    desktop_layout(
        &listing.title,
        ctx,
        html! {
            article.details.fade-in {
                a href="/" { "← Back" }

                h1 { (listing.title) }
                div.headline {
                    div {
                        "★ " (listing.rating) " · "
                        u { (listing.review_count) " " (t.reviews) }
                        " · " (listing.location)
                    }
                    div {
                        button.link-button type="button"
                            hx-get=(with_listing("/dialogs/share", Some(&listing.id)))
                            hx-target="#modal"
                        { "⤴ " (t.share) }
                        form method="post" action="/listings/save" style="display:inline"
                            hx-post="/listings/save" hx-target="#modal"
                        {
                            input type="hidden" name="propertyId" value=(listing.id);
                            button.link-button type="submit" {
                                @if vm.saved { "♥ " (t.saved) } @else { "♡ " (t.save) }
                            }
                        }
                    }
                }

                div.photo-grid {
                    @if let Some((main, thumbs)) = vm.gallery.split_first() {
                        img src=(main) alt=(listing.title) hx-get=(gallery_url) hx-target="#modal";
                        div.thumbs {
                            @for (i, img) in thumbs.iter().enumerate() {
                                img src=(img) alt={ "Gallery " (i) } loading="lazy"
                                    hx-get=(gallery_url) hx-target="#modal";
                            }
                        }
                    }
                    button.show-all type="button" hx-get=(gallery_url) hx-target="#modal" {
                        (t.show_photos)
                    }
                }

                div.columns {
                    div {
                        div.section {
                            h2 { (listing.kind) " " (t.hosted_by) " " (listing.host_name) }
                            p {
                                (listing.capacity.guests) " " (t.guests) " · "
                                (listing.capacity.bedrooms) " bedrooms · "
                                (listing.capacity.beds) " beds · "
                                (listing.capacity.bathrooms) " baths"
                            }
                        }

                        div.section {
                            (highlight("🛡", "Self check-in", "Check yourself in with the keypad."))
                            (highlight("📍", "Great location", "90% of recent guests gave the location a 5-star rating."))
                            @if vm.saved {
                                (highlight("♥", "Saved to your list", "You loved this property!"))
                            }
                        }

                        div.section {
                            h2 { "About this place" }
                            p { (listing.description) }
                        }

                        h2 { "What this place offers" }
                        ul.amenities {
                            @for amenity in &listing.amenities {
                                li { (amenity) }
                            }
                        }
                    }

                    (reserve_card(ctx, vm))
                }
            }
        },
    )
}

fn highlight(icon: &str, title: &str, text: &str) -> Markup {
    html! {
        p {
            span aria-hidden="true" { (icon) " " }
            strong { (title) }
            br;
            small { (text) }
        }
    }
}

fn reserve_card(ctx: &PageCtx, vm: &DetailsVm) -> Markup {
    let t = ctx.t();
    let quote = &vm.quote;

    html! {
        aside.reserve-card {
            div.line {
                span { strong { "$" (quote.nightly) } " / " (t.night) }
                u { (vm.listing.review_count) " " (t.reviews) }
            }

            div.dates {
                div {
                    div.label { (t.check_in) }
                    div { (vm.stay.check_in.format("%m/%d/%Y").to_string()) }
                }
                div {
                    div.label { (t.check_out) }
                    div { (vm.stay.check_out.format("%m/%d/%Y").to_string()) }
                }
                div.full {
                    div.label { (t.guests) }
                    div { "1 " (t.guest) }
                }
            }

            @if vm.reserved {
                div.reserved { "✓ " (t.reserved) }
            } @else {
                form method="post" action="/listings/reserve" {
                    input type="hidden" name="propertyId" value=(vm.listing.id);
                    button.primary type="submit" { (t.reserve) }
                }
            }

            p style="text-align:center" { small { "You won't be charged yet" } }

            div.line {
                u { "$" (quote.nightly) " x " (quote.nights) " " (t.night) }
                span { "$" (quote.lodging) }
            }
            div.line {
                u { (t.cleaning_fee) }
                span { "$" (quote.cleaning_fee) }
            }
            div.line {
                u { (t.service_fee) }
                span { "$" (quote.service_fee) }
            }
            div.line.total {
                span { (t.total) }
                span { "$" (quote.total) }
            }
        }
    }
}
