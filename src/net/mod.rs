//! REST client layer: wire types, error taxonomy, and request helpers.

pub mod api;
pub mod error;
pub mod types;
