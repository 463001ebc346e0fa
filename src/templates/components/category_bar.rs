use crate::domain::listing::Category;
use maud::{html, Markup};

/// "All" plus every category, as submit buttons of one form.
pub fn category_bar(active: Option<Category>) -> Markup {
    html! {
        form.category-bar method="post" action="/filters/category" {
            button type="submit" name="category" value="" .active[active.is_none()] { "All" }
            @for category in Category::ALL {
                button type="submit"
                    name="category"
                    value=(category.label())
                    .active[active == Some(category)]
                { (category.label()) }
            }
        }
    }
}
