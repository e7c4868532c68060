use super::*;

#[test]
fn every_category_slug_resolves() {
    for cat in categories() {
        let found = category_by_slug(&cat.slug).expect("slug should resolve");
        assert_eq!(found, cat);
    }
    assert!(category_by_slug("nonexistent").is_none());
}

#[test]
fn products_by_category_only_returns_that_category() {
    let electronics = products_by_category("electronics");
    assert!(!electronics.is_empty());
    assert!(electronics.iter().all(|p| p.category == "electronics"));
}

#[test]
fn every_product_belongs_to_a_known_category() {
    for product in featured_products() {
        assert!(
            category_by_slug(&product.category).is_some(),
            "product {} references unknown category {}",
            product.id,
            product.category
        );
    }
}

#[test]
fn subcategories_filter_by_parent() {
    let kitchen = subcategories_for("kitchen");
    assert!(!kitchen.is_empty());
    assert!(kitchen.iter().all(|s| s.parent == "kitchen"));
    assert!(subcategories_for("nonexistent").is_empty());
}

#[test]
fn discounted_products_all_carry_a_real_discount() {
    let deals = discounted_products();
    assert!(!deals.is_empty());
    for p in &deals {
        assert!(p.on_sale());
        assert!(p.old_price.unwrap() > p.price);
    }
}

#[test]
fn discount_percent_rounds_to_whole_number() {
    let p = Product {
        id: "x".to_owned(),
        name: "X".to_owned(),
        description: String::new(),
        price: 75.0,
        old_price: Some(100.0),
        image: String::new(),
        category: "electronics".to_owned(),
        in_stock: true,
    };
    assert_eq!(p.discount_percent(), Some(25));
}

#[test]
fn discount_percent_none_without_markdown() {
    let mut p = featured_products().remove(4);
    assert_eq!(p.old_price, None);
    assert_eq!(p.discount_percent(), None);

    // An "old price" at or below the current price is not a sale.
    p.old_price = Some(p.price);
    assert!(!p.on_sale());
    assert_eq!(p.discount_percent(), None);
}
