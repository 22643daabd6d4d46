//! API error handling
//!
//! Every failure surfaces to the caller as `{success: false, code, message}`
//! with a stable numeric code grouped by domain and a matching HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// API error taxonomy
#[derive(Debug, Error)]
pub enum ApiError {
    // =========================================================================
    // Authentication Errors (-1000 to -1099)
    // =========================================================================
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Forbidden(String),

    // =========================================================================
    // Request Errors (-1100 to -1199)
    // =========================================================================
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Game-Rule Errors (-2000 to -2099)
    // =========================================================================
    #[error("{0}")]
    InsufficientGold(String),

    #[error("{0}")]
    SlotOccupied(String),

    #[error("{0}")]
    InvalidSlot(String),

    #[error("{0}")]
    TreeNotReady(String),

    #[error("Tree is already ready to harvest")]
    TreeAlreadyReady,

    #[error("{0}")]
    ReductionTooHigh(String),

    #[error("{0}")]
    DailyAdLimitReached(String),

    #[error("{0}")]
    LocationNotUnlocked(String),

    // =========================================================================
    // Resource Errors (-3000 to -3099)
    // =========================================================================
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    // =========================================================================
    // Internal Errors (-5000 to -5099)
    // =========================================================================
    #[error("Internal server error")]
    Internal(String),

    #[error("Database error")]
    DatabaseError,

    #[error("Service unavailable")]
    ServiceUnavailable,
}

impl ApiError {
    /// Stable numeric error code
    pub fn error_code(&self) -> i32 {
        match self {
            // Authentication (-1000 to -1099)
            Self::Unauthorized => -1010,
            Self::Forbidden(_) => -1011,

            // Request (-1100 to -1199)
            Self::BadRequest(_) => -1100,
            Self::ValidationError(_) => -1102,

            // Game rules (-2000 to -2099)
            Self::InsufficientGold(_) => -2010,
            Self::SlotOccupied(_) => -2011,
            Self::InvalidSlot(_) => -2012,
            Self::TreeNotReady(_) => -2013,
            Self::TreeAlreadyReady => -2014,
            Self::ReductionTooHigh(_) => -2015,
            Self::DailyAdLimitReached(_) => -2016,
            Self::LocationNotUnlocked(_) => -2017,

            // Resources (-3000 to -3099)
            Self::NotFound(_) => -3000,
            Self::Conflict(_) => -3010,

            // Internal (-5000 to -5099)
            Self::Internal(_) => -5000,
            Self::ServiceUnavailable => -5001,
            Self::DatabaseError => -5002,
        }
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request — request shape and game-rule violations
            Self::BadRequest(_)
            | Self::ValidationError(_)
            | Self::InsufficientGold(_)
            | Self::SlotOccupied(_)
            | Self::InvalidSlot(_)
            | Self::TreeNotReady(_)
            | Self::TreeAlreadyReady
            | Self::ReductionTooHigh(_)
            | Self::DailyAdLimitReached(_)
            | Self::LocationNotUnlocked(_) => StatusCode::BAD_REQUEST,

            // 401 Unauthorized
            Self::Unauthorized => StatusCode::UNAUTHORIZED,

            // 403 Forbidden — ownership mismatch
            Self::Forbidden(_) => StatusCode::FORBIDDEN,

            // 404 Not Found
            Self::NotFound(_) => StatusCode::NOT_FOUND,

            // 409 Conflict — duplicate registration, already unlocked
            Self::Conflict(_) => StatusCode::CONFLICT,

            // 5xx
            Self::Internal(_) | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// API error response envelope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Stable numeric error code
    pub code: i32,
    /// Human-readable error message
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            success: false,
            code: err.error_code(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = ErrorResponse::from(&self);

        (status, Json(error_response)).into_response()
    }
}

// Implement From conversions

impl From<garden_db::DbError> for ApiError {
    fn from(err: garden_db::DbError) -> Self {
        use garden_db::DbError;
        match err {
            DbError::NotFound(msg) => Self::NotFound(msg),
            DbError::Duplicate(msg) => {
                // Slot collisions are game-rule failures, not registration
                // conflicts.
                if msg.starts_with("Slot ") {
                    Self::SlotOccupied(msg)
                } else {
                    Self::Conflict(msg)
                }
            }
            DbError::InsufficientGold(msg) => Self::InsufficientGold(msg),
            DbError::Constraint(msg) => Self::LocationNotUnlocked(msg),
            DbError::InvalidInput(msg) => Self::BadRequest(msg),
            DbError::Integrity(msg) => {
                tracing::error!(error = %msg, "Data integrity violation");
                Self::Internal(msg)
            }
            other => {
                tracing::error!(error = ?other, "Database error");
                Self::DatabaseError
            }
        }
    }
}

impl From<garden_auth::AuthError> for ApiError {
    fn from(err: garden_auth::AuthError) -> Self {
        use garden_auth::AuthError;
        match err {
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::Unauthenticated => {
                Self::Unauthorized
            }
            AuthError::GoogleRejected(_) => Self::Unauthorized,
            AuthError::GoogleUnreachable(msg) => {
                tracing::error!(error = %msg, "Google verification unreachable");
                Self::ServiceUnavailable
            }
            AuthError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<garden_core::EngineError> for ApiError {
    fn from(err: garden_core::EngineError) -> Self {
        use garden_core::EngineError;
        match &err {
            EngineError::ReductionTooHigh { .. } => Self::ReductionTooHigh(err.to_string()),
            EngineError::TreeAlreadyReady => Self::TreeAlreadyReady,
            EngineError::TreeNotReady { .. } => Self::TreeNotReady(err.to_string()),
            EngineError::DailyAdLimitReached { .. } => Self::DailyAdLimitReached(err.to_string()),
            EngineError::UnknownQuality(_) | EngineError::UnknownRequirementKind(_) => {
                tracing::error!(error = %err, "Engine invariant violation");
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map(|m| m.as_ref()).unwrap_or("invalid")
                    )
                })
            })
            .collect();
        Self::ValidationError(messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ApiError::Unauthorized.error_code(), -1010);
        assert_eq!(ApiError::InsufficientGold("x".into()).error_code(), -2010);
        assert_eq!(ApiError::NotFound("x".into()).error_code(), -3000);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Forbidden("no".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("test".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("dup".into()).status_code(),
            StatusCode::CONFLICT
        );
        // Game-rule violations are 400s, per the client contract.
        assert_eq!(
            ApiError::InsufficientGold("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::SlotOccupied("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_envelope_shape() {
        let err = ApiError::TreeNotReady("Tree is not ready yet. Wait 42 more seconds.".into());
        let body = ErrorResponse::from(&err);
        assert!(!body.success);
        assert_eq!(body.code, -2013);
        assert!(body.message.contains("42"));
    }

    #[test]
    fn test_db_duplicate_mapping() {
        let slot = garden_db::DbError::Duplicate("Slot 2 is already occupied.".into());
        assert!(matches!(ApiError::from(slot), ApiError::SlotOccupied(_)));

        let account = garden_db::DbError::Duplicate(
            "Player with this Google ID or email already exists".into(),
        );
        assert!(matches!(ApiError::from(account), ApiError::Conflict(_)));
    }

    #[test]
    fn test_engine_error_mapping() {
        let err = garden_core::EngineError::ReductionTooHigh { clicks: 5, max: 50 };
        let api: ApiError = err.into();
        assert_eq!(api.error_code(), -2015);
        assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
    }
}
