//! Reusable UI components shared across pages.

pub mod breadcrumb;
pub mod category_card;
pub mod flash_sale_timer;
pub mod footer;
pub mod header;
pub mod hero;
pub mod product_card;
