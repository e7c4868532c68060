//! Orchestration layer between UI components and the store/gateway.

pub mod auth;
