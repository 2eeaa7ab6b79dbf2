//! Static shared-secret admin gate.
//!
//! The caller-supplied key is compared for exact equality with the
//! configured secret. No hashing, no rotation, no per-admin identity.

use domains::{AdminAuthorizer, DomainError};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

pub struct SharedSecretAuthorizer {
    secret: SecretString,
}

impl SharedSecretAuthorizer {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }
}

impl AdminAuthorizer for SharedSecretAuthorizer {
    fn authorize(&self, supplied: Option<&str>) -> Result<(), DomainError> {
        match supplied {
            Some(key) if key == self.secret.expose_secret() => Ok(()),
            Some(_) => {
                debug!("admin key mismatch");
                Err(DomainError::Unauthorized)
            }
            None => {
                debug!("admin key missing");
                Err(DomainError::Unauthorized)
            }
        }
    }
}
