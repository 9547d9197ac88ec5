//! Routed pages: landing, sign-in, and profile.

pub mod home;
pub mod login;
pub mod profile;
