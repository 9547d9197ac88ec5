//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `profile`) with a `session` container
//! owning both slices, so cross-slice transitions (the logout cascade) are
//! a single atomic method instead of two independently dispatched updates.
//! All types here are plain structs with pure transition methods — signals
//! wrap them at the component layer, which keeps every transition testable
//! without a browser.

pub mod auth;
pub mod editor;
pub mod profile;
pub mod session;
