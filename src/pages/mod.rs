//! Top-level routed pages.

pub mod category;
pub mod deals;
pub mod home;
pub mod login;
