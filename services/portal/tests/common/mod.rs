use ed25519_dalek::pkcs8::EncodePrivateKey;
use ed25519_dalek::SigningKey;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use portal::app::AppState;
use portal::auth::session::{SessionClaims, SessionVerifier, SESSION_AUDIENCE, SESSION_ISSUER};
use portal::store::memory::InMemoryLicenseStore;
use resilia_access::{DecisionEngine, ModuleCatalog};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

// Deterministic Ed25519 seed so test tokens are reproducible.
pub const TEST_SEED: [u8; 32] = [5u8; 32];

pub fn test_state() -> (AppState, Arc<InMemoryLicenseStore>) {
    let signing_key = SigningKey::from_bytes(&TEST_SEED);
    let public_key_hex = hex::encode(signing_key.verifying_key().to_bytes());
    let verifier = SessionVerifier::from_hex(&public_key_hex, 5).expect("verifier");

    let catalog = Arc::new(ModuleCatalog::builtin());
    let store = Arc::new(InMemoryLicenseStore::new());
    let state = AppState {
        api_version: "v1".to_string(),
        catalog: catalog.clone(),
        engine: DecisionEngine::new(catalog, store.clone()),
        store: store.clone(),
        verifier: Arc::new(verifier),
    };
    (state, store)
}

pub fn mint_session(subject: &str, org: &str, roles: &[&str], groups: &[&str]) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs() as i64;
    let claims = SessionClaims {
        iss: SESSION_ISSUER.to_string(),
        aud: SESSION_AUDIENCE.to_string(),
        sub: subject.to_string(),
        org: org.to_string(),
        roles: roles.iter().map(|role| role.to_string()).collect(),
        groups: groups.iter().map(|group| group.to_string()).collect(),
        exp: now + 900,
        iat: now,
    };

    let signing_key = SigningKey::from_bytes(&TEST_SEED);
    let der = signing_key.to_pkcs8_der().expect("pkcs8");
    let encoding_key = EncodingKey::from_ed_der(der.as_bytes());
    jsonwebtoken::encode(&Header::new(Algorithm::EdDSA), &claims, &encoding_key).expect("token")
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}
