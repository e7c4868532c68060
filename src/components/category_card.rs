//! Card linking to a category page from the homepage grid.

use leptos::prelude::*;

use crate::data::Category;

/// A clickable card for one top-level category.
#[component]
pub fn CategoryCard(category: Category) -> impl IntoView {
    let href = format!("/{}", category.slug);
    let icon_class = format!("fas {}", category.icon);

    view! {
        <a class="category-card" href=href>
            <i class=icon_class aria-hidden="true"></i>
            <h3 class="category-card__name">{category.name}</h3>
            <p class="category-card__description">{category.description}</p>
        </a>
    }
}
