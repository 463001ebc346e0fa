use maud::{html, Markup};

/// Modal shell loaded into `#modal`. The close button swaps in an empty fragment.
pub fn dialog_frame(title: &str, wide: bool, body: Markup) -> Markup {
    html! {
        div.dialog-backdrop.fade-in {
            div.dialog.wide[wide] role="dialog" aria-modal="true" aria-label=(title) {
                header {
                    h2 { (title) }
                    button.close type="button" aria-label="Close"
                        hx-get="/dialogs/close" hx-target="#modal"
                    { "✕" }
                }
                div.body { (body) }
            }
        }
    }
}
