//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` owns the session state machine; `persist` is its durable-storage
//! glue. The structs are plain data held in `RwSignal` contexts so the
//! transition logic stays natively testable.

pub mod auth;
pub mod persist;
