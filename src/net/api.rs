//! REST helpers for the three user endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` so pages can route each failure kind:
//! server messages are surfaced verbatim, 401/403 triggers the logout
//! cascade on profile fetch, and everything else stays retryable.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::ProfileBody;
#[cfg(feature = "hydrate")]
use super::types::{Envelope, ErrorBody, LoginBody, LoginRequest, ProfileUpdateRequest};

/// Exchange credentials for a bearer token via `POST /user/login`.
///
/// # Errors
///
/// `ApiError::Status` for a non-2xx response, `ApiError::InvalidResponse`
/// when a 2xx body carries no token, `ApiError::Network` for transport
/// failures.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/user/login")
            .json(&LoginRequest { email, password })
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        let env: Envelope<LoginBody> = resp
            .json()
            .await
            .map_err(|_| ApiError::InvalidResponse)?;
        env.body.into_token()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the authenticated user's profile via `POST /user/profile`.
///
/// # Errors
///
/// `ApiError::Status` (401/403 means the token is no longer valid),
/// `ApiError::Network`, or `ApiError::InvalidResponse` on an unparseable
/// body.
pub async fn fetch_profile(token: &str) -> Result<ProfileBody, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/user/profile")
            .header("Authorization", &format!("Bearer {token}"))
            .json(&serde_json::json!({}))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_profile(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Update the user's display name via `PUT /user/profile`.
///
/// Callers validate the names first; this function sends them as given.
///
/// # Errors
///
/// Same taxonomy as [`fetch_profile`].
pub async fn update_profile(
    token: &str,
    first_name: &str,
    last_name: &str,
) -> Result<ProfileBody, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put("/user/profile")
            .header("Authorization", &format!("Bearer {token}"))
            .json(&ProfileUpdateRequest {
                first_name,
                last_name,
            })
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_profile(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, first_name, last_name);
        Err(ApiError::Unavailable)
    }
}

/// Unwrap the `{ body: { firstName, lastName } }` envelope of a profile
/// response, or classify the failure.
#[cfg(feature = "hydrate")]
async fn parse_profile(resp: gloo_net::http::Response) -> Result<ProfileBody, ApiError> {
    if !resp.ok() {
        return Err(error_from(resp).await);
    }
    let env: Envelope<ProfileBody> = resp
        .json()
        .await
        .map_err(|_| ApiError::InvalidResponse)?;
    Ok(env.body)
}

/// Build an `ApiError::Status` from a non-2xx response, keeping the server
/// `message` when the body parses.
#[cfg(feature = "hydrate")]
async fn error_from(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    log::warn!("request failed with status {status}");
    ApiError::Status { status, message }
}
