use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Identifiant ou mot de passe incorrect")]
    BadCredentials,

    #[error("malformed credential record for '{user}': {reason}")]
    MalformedRecord { user: String, reason: String },

    #[error("failed to generate salt: {0}")]
    Salt(String),

    #[error("password must not be empty")]
    EmptyPassword,
}
