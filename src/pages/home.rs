//! Homepage: hero, category grid, flash-sale strip, featured products.

use leptos::prelude::*;

use crate::components::category_card::CategoryCard;
use crate::components::flash_sale_timer::FlashSaleTimer;
use crate::components::hero::Hero;
use crate::components::product_card::ProductCard;
use crate::data;

/// Flash sale window shown on the homepage: three days.
const FLASH_SALE_SECS: u64 = 3 * 24 * 60 * 60;

/// Storefront landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let category_cards = data::categories()
        .into_iter()
        .map(|c| view! { <CategoryCard category=c/> })
        .collect::<Vec<_>>();

    let featured = data::featured_products()
        .into_iter()
        .map(|p| view! { <ProductCard product=p/> })
        .collect::<Vec<_>>();

    view! {
        <div class="home-page">
            <Hero/>

            <section class="home-page__section">
                <h2 class="home-page__heading">"Shop by Category"</h2>
                <div class="home-page__category-grid">{category_cards}</div>
            </section>

            <section class="home-page__section home-page__flash-sale">
                <h2 class="home-page__heading">"Flash Sale"</h2>
                <p>"Hurry — these prices end soon!"</p>
                <FlashSaleTimer ends_in_secs=FLASH_SALE_SECS/>
            </section>

            <section class="home-page__section">
                <h2 class="home-page__heading">"Featured Products"</h2>
                <div class="home-page__product-grid">{featured}</div>
            </section>
        </div>
    }
}
