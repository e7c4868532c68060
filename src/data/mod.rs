//! Mock catalog data: categories, subcategories, and featured products.
//!
//! The storefront is backend-less for browsing; these lists stand in for
//! what a product API would return. Slugs double as route segments.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// A top-level product category.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// URL-friendly slug, also the route segment (`/electronics`).
    pub slug: String,
    pub description: String,
    /// Font Awesome icon class.
    pub icon: String,
}

/// A subcategory shown on its parent category's page.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    /// Slug of the parent category.
    pub parent: String,
    pub image: String,
}

/// A product in the catalog.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Original price when the product is discounted.
    pub old_price: Option<f64>,
    pub image: String,
    /// Parent category slug.
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    /// True when the product carries a visible discount.
    #[must_use]
    pub fn on_sale(&self) -> bool {
        self.old_price.is_some_and(|old| old > self.price)
    }

    /// Discount as a whole percentage, when on sale.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let old = self.old_price?;
        if old <= self.price {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = ((1.0 - self.price / old) * 100.0).round() as u32;
        Some(pct)
    }
}

fn category(id: &str, name: &str, slug: &str, description: &str, icon: &str) -> Category {
    Category {
        id: id.to_owned(),
        name: name.to_owned(),
        slug: slug.to_owned(),
        description: description.to_owned(),
        icon: icon.to_owned(),
    }
}

/// The main categories shown on the homepage and in the header dropdown.
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        category("1", "Electronics", "electronics", "Latest gadgets and devices", "fa-laptop"),
        category("2", "Clothing", "clothing", "Fashion for men and women", "fa-tshirt"),
        category("3", "Home & Kitchen", "kitchen", "Everything for your home", "fa-blender"),
        category("4", "Beauty", "beauty", "Skincare and cosmetics", "fa-spa"),
        category("5", "Sports", "sports", "Equipment and accessories", "fa-football-ball"),
    ]
}

/// Look up a category by its slug.
#[must_use]
pub fn category_by_slug(slug: &str) -> Option<Category> {
    categories().into_iter().find(|c| c.slug == slug)
}

fn subcategory(id: &str, name: &str, parent: &str, image: &str) -> Subcategory {
    Subcategory {
        id: id.to_owned(),
        name: name.to_owned(),
        parent: parent.to_owned(),
        image: image.to_owned(),
    }
}

/// Subcategories grouped under their parent category slug.
#[must_use]
pub fn subcategories_for(parent: &str) -> Vec<Subcategory> {
    let all = vec![
        subcategory("sub1", "Smartphones", "electronics", "/images/sub/smartphones.jpg"),
        subcategory("sub2", "Laptops", "electronics", "/images/sub/laptops.jpg"),
        subcategory("sub3", "Audio", "electronics", "/images/sub/audio.jpg"),
        subcategory("sub4", "Men's Fashion", "clothing", "/images/sub/mens.jpg"),
        subcategory("sub5", "Women's Fashion", "clothing", "/images/sub/womens.jpg"),
        subcategory("sub6", "Cookware", "kitchen", "/images/sub/cookware.jpg"),
        subcategory("sub7", "Small Appliances", "kitchen", "/images/sub/appliances.jpg"),
        subcategory("sub8", "Skincare", "beauty", "/images/sub/skincare.jpg"),
        subcategory("sub9", "Fitness", "sports", "/images/sub/fitness.jpg"),
    ];
    all.into_iter().filter(|s| s.parent == parent).collect()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    old_price: Option<f64>,
    image: &str,
    cat: &str,
    in_stock: bool,
) -> Product {
    Product {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        price,
        old_price,
        image: image.to_owned(),
        category: cat.to_owned(),
        in_stock,
    }
}

/// Featured products shown on the homepage and filtered on category pages.
#[must_use]
pub fn featured_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Smart Watch Series 5",
            "Latest smartwatch with health monitoring and fitness tracking",
            199.99,
            Some(249.99),
            "/images/products/smart-watch.jpg",
            "electronics",
            true,
        ),
        product(
            "2",
            "Wireless Headphones",
            "Premium noise-cancelling wireless headphones",
            129.99,
            Some(159.99),
            "/images/products/headphones.jpg",
            "electronics",
            true,
        ),
        product(
            "3",
            "Latest Smartphone",
            "Flagship smartphone with advanced camera and performance",
            699.99,
            Some(799.99),
            "/images/products/smartphone.jpg",
            "electronics",
            true,
        ),
        product(
            "4",
            "Professional Camera",
            "High-end DSLR camera for professional photography",
            899.99,
            Some(999.99),
            "/images/products/camera.jpg",
            "electronics",
            false,
        ),
        product(
            "5",
            "Classic Denim Jacket",
            "Timeless denim jacket in a regular fit",
            59.99,
            None,
            "/images/products/denim-jacket.jpg",
            "clothing",
            true,
        ),
        product(
            "6",
            "Running Sneakers",
            "Lightweight sneakers built for daily runs",
            89.99,
            Some(119.99),
            "/images/products/sneakers.jpg",
            "clothing",
            true,
        ),
        product(
            "7",
            "Espresso Machine",
            "Compact 15-bar espresso machine with milk frother",
            249.99,
            Some(299.99),
            "/images/products/espresso.jpg",
            "kitchen",
            true,
        ),
        product(
            "8",
            "Chef's Knife Set",
            "Five-piece forged knife set with storage block",
            79.99,
            None,
            "/images/products/knife-set.jpg",
            "kitchen",
            true,
        ),
        product(
            "9",
            "Vitamin C Serum",
            "Brightening serum with hyaluronic acid",
            24.99,
            Some(34.99),
            "/images/products/serum.jpg",
            "beauty",
            true,
        ),
        product(
            "10",
            "Daily Moisturizer",
            "Fragrance-free moisturizer for all skin types",
            18.99,
            None,
            "/images/products/moisturizer.jpg",
            "beauty",
            true,
        ),
        product(
            "11",
            "Adjustable Dumbbell Set",
            "Space-saving dumbbells, 5 to 52 lbs per hand",
            299.99,
            Some(379.99),
            "/images/products/dumbbells.jpg",
            "sports",
            true,
        ),
        product(
            "12",
            "Yoga Mat",
            "Non-slip 6mm mat with carry strap",
            29.99,
            None,
            "/images/products/yoga-mat.jpg",
            "sports",
            true,
        ),
    ]
}

/// Products belonging to the given category slug.
#[must_use]
pub fn products_by_category(slug: &str) -> Vec<Product> {
    featured_products().into_iter().filter(|p| p.category == slug).collect()
}

/// Products currently on sale, for the deals page.
#[must_use]
pub fn discounted_products() -> Vec<Product> {
    featured_products().into_iter().filter(Product::on_sale).collect()
}
