//! Network boundary: wire types, the error taxonomy, and the API gateway.

pub mod api;
pub mod error;
pub mod types;
