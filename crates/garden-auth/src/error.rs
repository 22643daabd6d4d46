//! Authentication error types

use thiserror::Error;

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("No authentication provided")]
    Unauthenticated,

    #[error("Google token rejected: {0}")]
    GoogleRejected(String),

    #[error("Google verification request failed: {0}")]
    GoogleUnreachable(String),

    #[error("Internal auth error: {0}")]
    Internal(String),
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        AuthError::GoogleUnreachable(e.to_string())
    }
}

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;
