#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::ProfileBody;

/// The authenticated user's display name.
///
/// Replaced wholesale from the response body of a successful profile fetch
/// or update; cleared by the session logout cascade. In-memory only — the
/// server is the source of truth and the profile is refetched on mount.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub first_name: String,
    pub last_name: String,
}

impl ProfileState {
    /// Replace the profile with the fields echoed by the server.
    pub fn apply(&mut self, body: ProfileBody) {
        self.first_name = body.first_name;
        self.last_name = body.last_name;
    }

    /// Reset to the empty profile.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
