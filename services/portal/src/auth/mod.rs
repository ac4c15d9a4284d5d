//! Portal authentication modules.
//!
//! # Purpose
//! Groups session-token verification and principal resolution. Token issuance
//! belongs to the identity service; the portal only verifies.
pub mod session;

use axum::http::HeaderMap;

pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(axum::http::header::AUTHORIZATION)?;
    let value = value.to_str().ok()?;
    value.strip_prefix("Bearer ")
}
