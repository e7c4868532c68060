//! Homepage hero banner.

use leptos::prelude::*;

/// Large banner with the season's pitch and a call to action.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__content">
                <h1 class="hero__title">"Shop Smarter, Live Better"</h1>
                <p class="hero__subtitle">
                    "Discover thousands of products across electronics, fashion, home and more."
                </p>
                <a class="btn btn--primary hero__cta" href="/deals">
                    "Shop Deals"
                </a>
            </div>
        </section>
    }
}
