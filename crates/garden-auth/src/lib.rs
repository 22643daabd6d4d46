//! Garden Authentication Layer
//!
//! Authentication for the garden backend:
//!
//! - **Google sign-in**: ID tokens from the mobile client verified against
//!   Google's tokeninfo endpoint
//! - **JWT sessions**: HS256 access tokens issued after sign-in, validated
//!   on every request by a tower middleware layer
//!
//! ```text
//! Request → AuthLayer (decode bearer token) → Handler
//!                      │
//!                      ▼
//!              AuthenticatedPlayer in request extensions
//! ```

pub mod config;
pub mod error;
pub mod google;
pub mod jwt;
pub mod middleware;
pub mod types;

pub use config::{AuthConfig, GoogleConfig, JwtConfig};
pub use error::{AuthError, AuthResult};
pub use google::{GoogleProfile, GoogleVerifier};
pub use jwt::JwtService;
pub use middleware::{AuthLayer, AuthMiddleware};
pub use types::{AuthenticatedPlayer, TokenClaims};

use std::sync::Arc;

/// Main authentication service
pub struct AuthService {
    pub jwt: JwtService,
    pub google: GoogleVerifier,
    config: AuthConfig,
}

impl AuthService {
    /// Create a new auth service
    pub fn new(config: AuthConfig) -> Self {
        let jwt = JwtService::new(config.jwt.clone());
        let google = GoogleVerifier::new(config.google.clone());

        Self { jwt, google, config }
    }

    /// Get the config reference
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Create an auth layer for the Axum router
    pub fn layer(&self) -> AuthLayer {
        AuthLayer::new(Arc::new(self.jwt.clone()))
    }
}
