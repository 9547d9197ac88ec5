//! Shared chrome components used by every page.

pub mod footer;
pub mod header;
