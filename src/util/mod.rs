//! Browser utilities shared across pages.

pub mod token_store;
