// templates/pages/home.rs

use crate::domain::booking::Stay;
use crate::domain::{DerivedView, FilterSelection, Listing};
use crate::i18n::Translations;
use crate::templates::{
    components::{ai_banner, category_bar, classic_banner, empty_state, listing_card},
    desktop_layout, PageCtx,
};
use maud::{html, Markup};

pub fn home_page(ctx: &PageCtx, selection: &FilterSelection, view: &DerivedView) -> Markup {
    let t = ctx.t();
    let stay = Stay::sample();

    desktop_layout(
        "Vacation rentals",
        ctx,
        html! {
            div.container {
                (category_bar(selection.category()))

                @match selection {
                    FilterSelection::Ai(matches) => { (ai_banner(&matches.summary)) }
                    FilterSelection::Classic(criteria) => { (classic_banner(criteria, t)) }
                    _ => {}
                }

                @match view {
                    DerivedView::Flat(listings) => {
                        @if listings.is_empty() {
                            (empty_state())
                        }
                        (grid(listings, &stay, t))
                    }
                    DerivedView::Grouped(regions) => {
                        @for (region, listings) in regions {
                            section.region {
                                h2 { "Stays in " (region) }
                                (grid(listings, &stay, t))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn grid(listings: &[&Listing], stay: &Stay, t: &Translations) -> Markup {
    html! {
        div.grid {
            @for listing in listings {
                (listing_card(listing, stay, t))
            }
        }
    }
}
