//! Site footer.

use leptos::prelude::*;

use crate::data;

/// Footer with category links and the usual boilerplate columns.
#[component]
pub fn Footer() -> impl IntoView {
    let category_links = data::categories()
        .into_iter()
        .map(|c| {
            let href = format!("/{}", c.slug);
            view! {
                <li>
                    <a href=href>{c.name}</a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <h4>"ShopEasy"</h4>
                    <p>"Your one-stop shop for everything you need."</p>
                </div>
                <div class="footer__column">
                    <h4>"Categories"</h4>
                    <ul>{category_links}</ul>
                </div>
                <div class="footer__column">
                    <h4>"Customer Service"</h4>
                    <ul>
                        <li><a href="/deals">"Deals"</a></li>
                        <li><a href="/login">"My Account"</a></li>
                    </ul>
                </div>
            </div>
            <div class="footer__bottom">
                <span>"© 2025 ShopEasy. All rights reserved."</span>
            </div>
        </footer>
    }
}
