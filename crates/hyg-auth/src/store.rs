//! Credential records and the authenticator seam.

use std::collections::BTreeMap;

use hyg_config::{AuthConfig, UserRecord};
use hyg_core::entities::Actor;

use crate::credentials::verify_password;
use crate::error::AuthError;

/// Answers whether a username/password pair is valid.
pub trait Authenticator {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Credential records keyed by username.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: BTreeMap<String, UserRecord>,
}

impl CredentialStore {
    #[must_use]
    pub const fn new(users: BTreeMap<String, UserRecord>) -> Self {
        Self { users }
    }

    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.users.clone())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Verify credentials and resolve the acting user.
    ///
    /// Unknown users and wrong passwords produce the same error so the
    /// response does not reveal which usernames exist.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::BadCredentials` on mismatch, or
    /// `AuthError::MalformedRecord` if the stored hash cannot be read.
    pub fn login(&self, username: &str, password: &str) -> Result<Actor, AuthError> {
        let Some(record) = self.users.get(username) else {
            tracing::warn!(user = username, "login refused: unknown user");
            return Err(AuthError::BadCredentials);
        };

        if verify_password(username, password, &record.password_hash)? {
            tracing::debug!(user = username, role = %record.role, "login accepted");
            Ok(Actor::new(username, record.role))
        } else {
            tracing::warn!(user = username, "login refused: wrong password");
            Err(AuthError::BadCredentials)
        }
    }
}

impl Authenticator for CredentialStore {
    fn verify(&self, username: &str, password: &str) -> bool {
        match self.login(username, password) {
            Ok(_) => true,
            Err(AuthError::BadCredentials) => false,
            Err(error) => {
                tracing::warn!(%error, "credential record unusable");
                false
            }
        }
    }
}
