//! Deals page: every discounted product plus the sale countdown.

use leptos::prelude::*;

use crate::components::flash_sale_timer::FlashSaleTimer;
use crate::components::product_card::ProductCard;
use crate::data;

/// Deals window: 24 hours.
const DEALS_WINDOW_SECS: u64 = 24 * 60 * 60;

/// All products currently on sale.
#[component]
pub fn DealsPage() -> impl IntoView {
    let deals = data::discounted_products()
        .into_iter()
        .map(|p| view! { <ProductCard product=p/> })
        .collect::<Vec<_>>();

    view! {
        <div class="deals-page">
            <header class="deals-page__header">
                <h1>"Today's Deals"</h1>
                <p>"Fresh markdowns every day. These end in:"</p>
                <FlashSaleTimer ends_in_secs=DEALS_WINDOW_SECS/>
            </header>
            <div class="deals-page__product-grid">{deals}</div>
        </div>
    }
}
