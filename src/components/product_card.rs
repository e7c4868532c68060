//! Product card for homepage, category, and deals grids.

use leptos::prelude::*;

use crate::data::Product;
use crate::util::format;

/// One product tile: image, discount badge, name, price pair, stock state.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let badge = product
        .discount_percent()
        .map(|pct| view! { <span class="product-card__badge">{format!("-{pct}%")}</span> });

    let old_price = product
        .old_price
        .filter(|_| product.on_sale())
        .map(|old| view! { <span class="product-card__old-price">{format::price(old)}</span> });

    let stock = if product.in_stock {
        view! { <button class="btn btn--primary product-card__add">"Add to Cart"</button> }
            .into_any()
    } else {
        view! { <span class="product-card__out-of-stock">"Out of Stock"</span> }.into_any()
    };

    view! {
        <div class="product-card">
            <div class="product-card__media">
                <img src=product.image alt=product.name.clone() loading="lazy"/>
                {badge}
            </div>
            <div class="product-card__body">
                <h3 class="product-card__name">{product.name}</h3>
                <p class="product-card__description">{product.description}</p>
                <div class="product-card__prices">
                    <span class="product-card__price">{format::price(product.price)}</span>
                    {old_price}
                </div>
                {stock}
            </div>
        </div>
    }
}
