#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Every successful API response wraps its payload in a `body` field.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub body: T,
}

/// Credentials sent to `POST /user/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Payload of a successful login. The token is optional so a 2xx response
/// without one can be rejected as invalid rather than failing to parse.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginBody {
    /// Extract the token a successful login must carry. A 2xx response
    /// with a missing or empty token is invalid and must not touch
    /// session state.
    pub fn into_token(self) -> Result<String, crate::net::error::ApiError> {
        self.token
            .filter(|token| !token.is_empty())
            .ok_or(crate::net::error::ApiError::InvalidResponse)
    }
}

/// Profile fields echoed by `POST`/`PUT /user/profile`. The server sends
/// more fields (email, id, ...); only the names are read, the rest is
/// ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileBody {
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
}

/// Body of `PUT /user/profile`.
#[derive(Debug, Serialize)]
pub struct ProfileUpdateRequest<'a> {
    #[serde(rename = "firstName")]
    pub first_name: &'a str,
    #[serde(rename = "lastName")]
    pub last_name: &'a str,
}

/// Shape of non-2xx response bodies. The `message`, when present, is shown
/// to the user verbatim.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
