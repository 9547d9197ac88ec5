#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state holding the bearer token for API calls.
///
/// The authenticated flag is derived from the token rather than stored, so
/// the two can never disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: String,
}

impl AuthState {
    /// Build state from a token restored out of browser storage.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// True whenever a non-empty token is present.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}
