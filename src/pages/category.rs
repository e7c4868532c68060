//! Category page: breadcrumb, subcategories, and the filtered product grid.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::breadcrumb::Breadcrumb;
use crate::components::product_card::ProductCard;
use crate::data;

/// Page for a single category, selected by its slug route param.
/// Unknown slugs render a not-found message instead of a blank page.
#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    view! {
        <div class="category-page">
            {move || {
                let slug = slug();
                match data::category_by_slug(&slug) {
                    Some(category) => {
                        let subcats = data::subcategories_for(&category.slug)
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <div class="category-page__subcategory">
                                        <img src=s.image alt=s.name.clone() loading="lazy"/>
                                        <span>{s.name}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>();
                        let products = data::products_by_category(&category.slug)
                            .into_iter()
                            .map(|p| view! { <ProductCard product=p/> })
                            .collect::<Vec<_>>();

                        view! {
                            <div>
                                <Breadcrumb current=category.name.clone()/>
                                <h1 class="category-page__title">{category.name}</h1>
                                <p class="category-page__description">{category.description}</p>
                                <div class="category-page__subcategories">{subcats}</div>
                                <div class="category-page__product-grid">{products}</div>
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <div class="category-page__not-found">
                                <h1>"Category not found"</h1>
                                <a href="/">"Back to the homepage"</a>
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
