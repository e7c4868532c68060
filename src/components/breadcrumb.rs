//! Breadcrumb trail shown at the top of category pages.

use leptos::prelude::*;

/// Home › current page.
#[component]
pub fn Breadcrumb(current: String) -> impl IntoView {
    view! {
        <nav class="breadcrumb" aria-label="Breadcrumb">
            <a class="breadcrumb__link" href="/">
                "Home"
            </a>
            <span class="breadcrumb__separator">"/"</span>
            <span class="breadcrumb__current">{current}</span>
        </nav>
    }
}
