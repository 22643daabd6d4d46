//! Authentication DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Google sign-in request: the ID token obtained on-device
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoogleLoginRequest {
    /// Google ID token
    #[validate(length(min = 1, message = "idToken must not be empty"))]
    pub id_token: String,
}

/// Short profile summary returned alongside the access token
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginPlayerSummary {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub gold: i64,
    pub total_earnings: i64,
    pub total_trees_sold: i64,
}

/// Sign-in result
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Access token
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    /// Whether this sign-in created a fresh account
    pub is_new_player: bool,
    pub user: LoginPlayerSummary,
}

/// Authenticated profile echo
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub player_id: Uuid,
    pub google_id: String,
    pub email: String,
}

/// Auth service status
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatusResponse {
    pub google_oauth_configured: bool,
}
