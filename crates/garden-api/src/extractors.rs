//! Custom Axum extractors
//!
//! Request extractors for authentication and validation.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::{ApiError, ErrorResponse};

// =============================================================================
// Current Player Extractor
// =============================================================================

/// Authenticated player extracted from the request.
///
/// Populated by the auth middleware; extracting it from an unauthenticated
/// request rejects with 401.
#[derive(Debug, Clone)]
pub struct CurrentPlayer {
    /// Player ID
    pub player_id: Uuid,
    /// Google account ID
    pub google_id: String,
    /// Email address
    pub email: String,
}

impl CurrentPlayer {
    /// Enforce self-access: the path/resource player must be the caller.
    pub fn require_self(&self, player_id: Uuid, what: &str) -> Result<(), ApiError> {
        if self.player_id != player_id {
            return Err(ApiError::Forbidden(format!(
                "You can only access your own {}",
                what
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentPlayer
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<garden_auth::AuthenticatedPlayer>()
            .cloned()
            .map(|p| CurrentPlayer {
                player_id: p.player_id,
                google_id: p.google_id,
                email: p.email,
            })
            .ok_or_else(|| error_response(ApiError::Unauthorized))
    }
}

// =============================================================================
// Validated JSON Extractor
// =============================================================================

/// JSON extractor with validation
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> axum::extract::FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + validator::Validate,
{
    type Rejection = Response;

    async fn from_request(
        req: axum::http::Request<axum::body::Body>,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| error_response(ApiError::BadRequest(e.to_string())))?;

        value
            .validate()
            .map_err(|e| error_response(ApiError::from(e)))?;

        Ok(ValidatedJson(value))
    }
}

// =============================================================================
// Validated Query Extractor
// =============================================================================

/// Query extractor with validation
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + validator::Validate,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| error_response(ApiError::BadRequest(e.to_string())))?;

        value
            .validate()
            .map_err(|e| error_response(ApiError::from(e)))?;

        Ok(ValidatedQuery(value))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Create an error response from an ApiError
pub fn error_response(error: ApiError) -> Response {
    let status = error.status_code();
    let response = ErrorResponse::from(&error);

    (status, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_self_matches_only_own_id() {
        let id = Uuid::new_v4();
        let player = CurrentPlayer {
            player_id: id,
            google_id: "g".to_string(),
            email: "p@example.com".to_string(),
        };

        assert!(player.require_self(id, "data").is_ok());
        assert!(matches!(
            player.require_self(Uuid::new_v4(), "game state"),
            Err(ApiError::Forbidden(_))
        ));
    }
}
