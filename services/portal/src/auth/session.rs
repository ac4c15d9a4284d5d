//! Session token verification and principal resolution.
//!
//! # Purpose
//! Decodes the opaque session credential minted by the identity service into
//! a [`Principal`] the decision engine can evaluate.
//!
//! # Key invariants
//! - Session tokens are EdDSA/Ed25519 only; RSA/HS algorithms are rejected.
//! - `iss` and `aud` are mandatory and pinned to the identity/portal pair.
//! - Resolution is fail-closed: an unknown role string or an empty role list
//!   rejects the session instead of degrading it.
//!
//! # Security boundary
//! Only the Ed25519 public key is held here. The signing half never leaves
//! the identity service.
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use resilia_access::{from_claims, OrgId, Principal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SESSION_ISSUER: &str = "resilia-identity";
pub const SESSION_AUDIENCE: &str = "resilia-portal";

const ED25519_KEY_LEN: usize = 32;

/// Claims carried by identity-service session JWTs.
///
/// `roles` is ordered; the first entry is the principal's primary role.
/// `groups` carries security-group membership used for the administrator
/// capability flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub iss: String,
    pub aud: String,
    pub sub: String,
    pub org: String,
    pub roles: Vec<String>,
    pub groups: Vec<String>,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("key error: {0}")]
    Key(String),
    #[error("claims error: {0}")]
    Claims(#[from] resilia_access::AccessError),
}

/// Verifies session tokens against the identity service's public key.
#[derive(Clone)]
pub struct SessionVerifier {
    decoding_key: DecodingKey,
    leeway: u64,
}

impl std::fmt::Debug for SessionVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionVerifier")
            .field("leeway", &self.leeway)
            .finish_non_exhaustive()
    }
}

impl SessionVerifier {
    /// Build a verifier from a hex-encoded Ed25519 public key.
    ///
    /// # Errors
    /// - [`SessionError::Key`] when the input is not 32 hex-encoded bytes.
    pub fn from_hex(public_key_hex: &str, leeway: u64) -> Result<Self, SessionError> {
        let bytes = hex::decode(public_key_hex)
            .map_err(|err| SessionError::Key(format!("decode session public key: {err}")))?;
        if bytes.len() != ED25519_KEY_LEN {
            return Err(SessionError::Key(format!(
                "session public key must be {ED25519_KEY_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        // jsonwebtoken expects the JWK `x` component for EdDSA keys.
        let x = URL_SAFE_NO_PAD.encode(&bytes);
        let decoding_key = DecodingKey::from_ed_components(&x)?;
        Ok(Self {
            decoding_key,
            leeway,
        })
    }

    /// Verify a session token and return its claims.
    ///
    /// Validation pins the algorithm to EdDSA and checks issuer, audience,
    /// and expiry (with the configured leeway).
    ///
    /// # Errors
    /// - [`SessionError::Jwt`] for signature, algorithm, or claim failures.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let mut validation = Validation::new(Algorithm::EdDSA);
        validation.set_audience(&[SESSION_AUDIENCE]);
        validation.set_issuer(&[SESSION_ISSUER]);
        validation.leeway = self.leeway;
        let decoded =
            jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &validation)?;
        Ok(decoded.claims)
    }

    /// Verify a token and resolve the principal in one step.
    pub fn resolve(&self, token: &str) -> Result<Principal, SessionError> {
        let claims = self.verify(token)?;
        resolve_principal(&claims)
    }
}

/// Turn verified claims into the immutable per-session principal.
///
/// # Errors
/// - [`SessionError::Claims`] when a role string is unknown or the role list
///   is empty.
pub fn resolve_principal(claims: &SessionClaims) -> Result<Principal, SessionError> {
    Ok(from_claims(
        &claims.iss,
        &claims.sub,
        OrgId::new(&claims.org),
        &claims.roles,
        &claims.groups,
    )?)
}
