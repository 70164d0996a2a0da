//! Signed identity envelope.
//!
//! The persisted identity is a JSON payload plus an HMAC-SHA256 tag over the
//! payload bytes. Restore verifies the tag before adopting the identity, so
//! a value edited at rest is discarded rather than trusted.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

use moma_core::User;

type HmacSha256 = Hmac<Sha256>;

/// Errors when sealing or opening an envelope.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// Payload (de)serialization failed.
    #[error("envelope serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The tag is not valid hex.
    #[error("envelope tag is not valid hex")]
    MalformedTag,
    /// The tag does not match the payload.
    #[error("envelope signature mismatch")]
    BadSignature,
    /// The signing key was rejected by the MAC.
    #[error("invalid signing key")]
    InvalidKey,
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    payload: String,
    tag: String,
}

fn mac(key: &[u8]) -> Result<HmacSha256, EnvelopeError> {
    HmacSha256::new_from_slice(key).map_err(|_| EnvelopeError::InvalidKey)
}

/// Serialize and sign an identity.
pub fn seal(user: &User, key: &[u8]) -> Result<String, EnvelopeError> {
    let payload = serde_json::to_string(user)?;
    let mut mac = mac(key)?;
    mac.update(payload.as_bytes());
    let tag = hex::encode(mac.finalize().into_bytes());
    Ok(serde_json::to_string(&Envelope { payload, tag })?)
}

/// Verify and deserialize a persisted identity.
pub fn open(raw: &str, key: &[u8]) -> Result<User, EnvelopeError> {
    let envelope: Envelope = serde_json::from_str(raw)?;
    let tag = hex::decode(&envelope.tag).map_err(|_| EnvelopeError::MalformedTag)?;
    let mut mac = mac(key)?;
    mac.update(envelope.payload.as_bytes());
    mac.verify_slice(&tag)
        .map_err(|_| EnvelopeError::BadSignature)?;
    Ok(serde_json::from_str(&envelope.payload)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use moma_core::{Email, Gender, Role, UserId};

    use super::*;

    const KEY: &[u8] = b"test-signing-key-with-enough-bytes";

    fn identity() -> User {
        User {
            id: UserId::new(1),
            email: Email::parse("admin@example.com").unwrap(),
            name: "Admin User".to_string(),
            role: Role::Admin,
            gender: Gender::Male,
        }
    }

    #[test]
    fn test_seal_open_roundtrip() {
        let sealed = seal(&identity(), KEY).unwrap();
        let opened = open(&sealed, KEY).unwrap();
        assert_eq!(opened, identity());
    }

    #[test]
    fn test_open_rejects_tampered_payload() {
        let sealed = seal(&identity(), KEY).unwrap();
        let tampered = sealed.replace("\\\"role\\\":\\\"admin\\\"", "\\\"role\\\":\\\"user\\\"");
        assert_ne!(sealed, tampered);
        assert!(matches!(
            open(&tampered, KEY),
            Err(EnvelopeError::BadSignature)
        ));
    }

    #[test]
    fn test_open_rejects_wrong_key() {
        let sealed = seal(&identity(), KEY).unwrap();
        assert!(matches!(
            open(&sealed, b"some-other-key-entirely"),
            Err(EnvelopeError::BadSignature)
        ));
    }

    #[test]
    fn test_open_rejects_garbage() {
        assert!(open("not json at all", KEY).is_err());
        assert!(open("{\"payload\":\"{}\",\"tag\":\"zz\"}", KEY).is_err());
    }
}
