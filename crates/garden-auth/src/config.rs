//! Authentication configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Google sign-in configuration
    pub google: GoogleConfig,
}

/// JWT token configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens (should be at least 256 bits)
    pub secret: String,
    /// Access token lifetime
    #[serde(with = "humantime_serde")]
    pub access_token_lifetime: Duration,
    /// Token issuer claim
    pub issuer: String,
    /// Token audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(), // Must be set in production
            access_token_lifetime: Duration::from_secs(7 * 24 * 60 * 60), // 7 days
            issuer: "garden".to_string(),
            audience: "garden-api".to_string(),
        }
    }
}

/// Google sign-in configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    /// OAuth client ID the mobile app authenticates with; ID tokens must
    /// carry it as their audience
    pub client_id: String,
    /// Token verification endpoint
    pub tokeninfo_url: String,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            tokeninfo_url: "https://oauth2.googleapis.com/tokeninfo".to_string(),
        }
    }
}

impl GoogleConfig {
    /// Whether Google sign-in has been configured
    pub fn is_configured(&self) -> bool {
        !self.client_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_jwt_lifetime_is_a_week() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_lifetime, Duration::from_secs(604800));
        assert_eq!(config.issuer, "garden");
    }

    #[test]
    fn google_configured_requires_client_id() {
        assert!(!GoogleConfig::default().is_configured());
        let config = GoogleConfig {
            client_id: "client.apps.googleusercontent.com".to_string(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}
