//! Salted password hashes.
//!
//! Format: `sha256$<salt-hex>$<digest-hex>`, where the digest is
//! `SHA-256("<salt-hex>:<password>")`.
//!
//! A single salted SHA-256 pass is fast to brute-force if the config file
//! leaks. Keep `config.toml` readable only by the service account.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::error::AuthError;

const SCHEME: &str = "sha256";
const SALT_LEN: usize = 16;

/// Hash a password with a fresh random salt.
///
/// # Errors
///
/// Returns `AuthError::EmptyPassword` for an empty password, or
/// `AuthError::Salt` if the OS random source fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    if password.is_empty() {
        return Err(AuthError::EmptyPassword);
    }
    let mut salt = [0u8; SALT_LEN];
    getrandom::fill(&mut salt).map_err(|e| AuthError::Salt(e.to_string()))?;
    let salt_hex: String = salt.iter().map(|b| format!("{b:02x}")).collect();
    Ok(hash_password_with_salt(password, &salt_hex))
}

/// Hash a password with a caller-provided salt.
#[must_use]
pub fn hash_password_with_salt(password: &str, salt_hex: &str) -> String {
    format!("{SCHEME}${salt_hex}${}", digest(salt_hex, password))
}

/// Check a password against a stored hash.
///
/// # Errors
///
/// Returns `AuthError::MalformedRecord` if `stored` is not in the expected format.
pub fn verify_password(user: &str, password: &str, stored: &str) -> Result<bool, AuthError> {
    let malformed = |reason: &str| AuthError::MalformedRecord {
        user: user.to_string(),
        reason: reason.to_string(),
    };

    let mut parts = stored.splitn(3, '$');
    let scheme = parts.next().ok_or_else(|| malformed("empty hash"))?;
    let salt = parts.next().ok_or_else(|| malformed("missing salt"))?;
    let expected = parts.next().ok_or_else(|| malformed("missing digest"))?;

    if scheme != SCHEME {
        return Err(malformed("unsupported hash scheme"));
    }

    let expected = expected.to_ascii_lowercase();
    Ok(digest(salt, password)
        .as_bytes()
        .ct_eq(expected.as_bytes())
        .into())
}

fn digest(salt_hex: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
