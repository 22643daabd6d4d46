//! Google ID-token verification.
//!
//! The mobile client completes the Google sign-in flow on-device and sends
//! the resulting ID token to the backend. Verification is delegated to
//! Google's tokeninfo endpoint; the only local checks are the audience and
//! the presence of a subject.

use serde::Deserialize;

use crate::config::GoogleConfig;
use crate::error::{AuthError, AuthResult};

/// Profile fields extracted from a verified Google ID token
#[derive(Debug, Clone)]
pub struct GoogleProfile {
    /// Stable Google account ID (`sub` claim)
    pub google_id: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenInfoResponse {
    sub: String,
    aud: String,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

/// Verifies Google ID tokens via the tokeninfo endpoint
#[derive(Clone)]
pub struct GoogleVerifier {
    config: GoogleConfig,
    client: reqwest::Client,
}

impl GoogleVerifier {
    pub fn new(config: GoogleConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Whether a client ID has been configured
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Verify an ID token and return the signed-in profile
    pub async fn verify_id_token(&self, id_token: &str) -> AuthResult<GoogleProfile> {
        let response = self
            .client
            .get(&self.config.tokeninfo_url)
            .query(&[("id_token", id_token)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::GoogleRejected(format!(
                "tokeninfo returned {}",
                response.status()
            )));
        }

        let info: TokenInfoResponse = response.json().await?;

        if info.aud != self.config.client_id {
            tracing::warn!(aud = %info.aud, "Google token issued for a different client");
            return Err(AuthError::GoogleRejected(
                "token audience does not match".to_string(),
            ));
        }

        let email = info
            .email
            .ok_or_else(|| AuthError::GoogleRejected("token carries no email".to_string()))?;

        Ok(GoogleProfile {
            name: info.name.unwrap_or_else(|| email.clone()),
            google_id: info.sub,
            email,
            picture: info.picture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokeninfo_response_parses() {
        let json = r#"{
            "sub": "104055744437937272058",
            "aud": "client.apps.googleusercontent.com",
            "email": "player@example.com",
            "name": "Player One",
            "picture": "https://example.com/p.png",
            "exp": "1893456000"
        }"#;
        let info: TokenInfoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(info.sub, "104055744437937272058");
        assert_eq!(info.email.as_deref(), Some("player@example.com"));
    }

    #[test]
    fn minimal_response_parses() {
        let json = r#"{"sub": "1", "aud": "a"}"#;
        let info: TokenInfoResponse = serde_json::from_str(json).unwrap();
        assert!(info.email.is_none());
        assert!(info.name.is_none());
        assert!(info.picture.is_none());
    }
}
