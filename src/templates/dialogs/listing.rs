use crate::domain::Listing;
use crate::share::ShareLinks;
use crate::templates::components::dialog_frame;
use crate::templates::PageCtx;
use maud::{html, Markup};

pub fn share_dialog(ctx: &PageCtx, listing: &Listing, links: &ShareLinks) -> Markup {
    let t = ctx.t();
    let body = html! {
        p {
            strong { (listing.title) }
            br;
            small { (listing.location) }
        }
        div.share-grid {
            label.copy {
                span { (t.copy_link) }
                input type="text" readonly value=(links.url) onclick="this.select()";
            }
            a href=(links.email) { "✉ Email" }
            a href=(links.whatsapp) target="_blank" rel="noopener" { "WhatsApp" }
            a href=(links.facebook) target="_blank" rel="noopener" { "Facebook" }
        }
    };
    dialog_frame(t.share_title, false, body)
}

/// Every gallery image, one after another.
pub fn gallery_dialog(listing: &Listing, images: &[String]) -> Markup {
    let body = html! {
        div.viewer {
            @for (i, src) in images.iter().enumerate() {
                img src=(src) alt={ (listing.title) " " (i + 1) } loading="lazy";
            }
        }
    };
    dialog_frame(&listing.title, true, body)
}
