//! # hyg-auth
//!
//! Username/password verification against configured credential records.
//!
//! Each user has one record holding a salted SHA-256 hash and a role. The
//! [`Authenticator`] trait is the boolean seam the presentation layer calls;
//! [`CredentialStore::login`] additionally resolves the acting [`Actor`].
//!
//! [`Actor`]: hyg_core::entities::Actor

pub mod credentials;
pub mod error;
pub mod store;

pub use credentials::{hash_password, hash_password_with_salt, verify_password};
pub use error::AuthError;
pub use store::{Authenticator, CredentialStore};
