//! Core authentication types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated player extracted from a validated token.
///
/// Inserted into request extensions by the auth middleware; handlers pull
/// it out through the API crate's extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedPlayer {
    /// Player ID
    pub player_id: Uuid,
    /// Google account ID
    pub google_id: String,
    /// Email address
    pub email: String,
}

/// Claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: player ID
    pub sub: String,
    /// Google account ID
    pub google_id: String,
    /// Email address
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiry (Unix timestamp)
    pub exp: i64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Token ID
    pub jti: String,
}
