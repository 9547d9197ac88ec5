#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::ProfileBody;
use crate::state::auth::AuthState;
use crate::state::profile::ProfileState;

/// Single source of truth for the authenticated session.
///
/// Owns both state slices so cross-slice transitions happen atomically:
/// `logout` clears auth and profile in one step and can never leave one
/// behind. Components hold this in an `RwSignal` provided via context and
/// mutate it only through these methods.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub auth: AuthState,
    pub profile: ProfileState,
}

impl Session {
    /// Initial session built from whatever token storage restored, if any.
    /// No network call happens here.
    pub fn restored(token: Option<String>) -> Self {
        Self {
            auth: AuthState::with_token(token.unwrap_or_default()),
            profile: ProfileState::default(),
        }
    }

    /// A successful login replaces the token wholesale. The profile stays
    /// empty until the profile page fetches it.
    pub fn login_succeeded(&mut self, token: String) {
        self.auth = AuthState::with_token(token);
    }

    /// Store the profile returned by a successful fetch or update.
    pub fn profile_loaded(&mut self, body: ProfileBody) {
        self.profile.apply(body);
    }

    /// Atomic logout cascade: token and profile are cleared together.
    /// Persisted storage is the caller's concern (`util::token_store`).
    pub fn logout(&mut self) {
        self.auth = AuthState::default();
        self.profile.clear();
    }
}
