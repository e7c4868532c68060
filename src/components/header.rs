//! Sticky site header: logo, search, account links, and the category
//! dropdown navigation.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::data;
use crate::state::auth::AuthState;

/// Whether a nav link matches the current location. `/` only matches
/// exactly; everything else matches by prefix.
fn is_active(current: &str, path: &str) -> bool {
    if path == "/" {
        return current == "/";
    }
    current.starts_with(path)
}

/// Whether the current location is one of the category pages, for
/// highlighting the dropdown trigger itself.
fn is_category_route(current: &str) -> bool {
    data::categories().iter().any(|c| is_active(current, &format!("/{}", c.slug)))
}

fn link_class(current: &str, path: &str) -> &'static str {
    if is_active(current, path) { "nav__link nav__link--active" } else { "nav__link" }
}

/// Site-wide header with category dropdown and session-aware account area.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let dropdown_open = RwSignal::new(false);
    let search_query = RwSignal::new(String::new());

    let categories_class = move || {
        if is_category_route(&pathname.get()) {
            "nav__link nav__link--active"
        } else {
            "nav__link"
        }
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::services::auth::logout(auth));
        #[cfg(not(feature = "hydrate"))]
        let _ = auth;
    };

    let dropdown_items = move || {
        data::categories()
            .into_iter()
            .map(|c| {
                let href = format!("/{}", c.slug);
                view! {
                    <li>
                        <a
                            class="nav__dropdown-link"
                            href=href
                            on:click=move |_| dropdown_open.set(false)
                        >
                            {c.name}
                        </a>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class="header">
            <div class="header__topbar">"Free shipping on orders over $50"</div>

            <div class="header__main">
                <a class="header__logo" href="/">
                    "ShopEasy"
                </a>

                <div class="header__search">
                    <input
                        class="header__search-input"
                        type="search"
                        placeholder="Search products..."
                        prop:value=move || search_query.get()
                        on:input=move |ev| search_query.set(event_target_value(&ev))
                    />
                </div>

                <div class="header__actions">
                    <a class="header__icon" href="/login" title="Wishlist">
                        <i class="fas fa-heart" aria-hidden="true"></i>
                        <span class="header__badge">"0"</span>
                    </a>
                    <a class="header__icon" href="/login" title="Cart">
                        <i class="fas fa-shopping-cart" aria-hidden="true"></i>
                        <span class="header__badge">"0"</span>
                    </a>
                    <Show
                        when=move || auth.get().is_authenticated
                        fallback=|| {
                            view! {
                                <a class="header__account" href="/login">
                                    "Sign In"
                                </a>
                            }
                        }
                    >
                        <span class="header__account">
                            {move || {
                                auth.get().user.map(|u| u.username).unwrap_or_default()
                            }}
                        </span>
                        <button class="header__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>

            <nav class="nav">
                <ul class="nav__list">
                    <li>
                        <a
                            class=move || link_class(&pathname.get(), "/")
                            href="/"
                        >
                            "Home"
                        </a>
                    </li>
                    <li
                        class="nav__dropdown"
                        on:mouseenter=move |_| dropdown_open.set(true)
                        on:mouseleave=move |_| dropdown_open.set(false)
                    >
                        <a
                            class=categories_class
                            href="#"
                            on:click=move |ev| {
                                ev.prevent_default();
                                dropdown_open.update(|open| *open = !*open);
                            }
                        >
                            "Categories"
                            <i class="fas fa-chevron-down" aria-hidden="true"></i>
                        </a>
                        <Show when=move || dropdown_open.get()>
                            <ul class="nav__dropdown-menu">{dropdown_items}</ul>
                        </Show>
                    </li>
                    <li>
                        <a
                            class=move || link_class(&pathname.get(), "/deals")
                            href="/deals"
                        >
                            "Deals"
                        </a>
                    </li>
                </ul>
            </nav>
        </header>
    }
}
