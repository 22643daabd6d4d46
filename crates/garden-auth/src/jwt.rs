//! JWT token service.
//!
//! Issues and validates the HS256 access tokens that stand in for a game
//! session after Google sign-in. Tokens are stateless; expiry is the only
//! revocation mechanism this game needs.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::error::{AuthError, AuthResult};
use crate::types::{AuthenticatedPlayer, TokenClaims};

/// JWT service for token management
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Create a new JWT service
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue an access token for a signed-in player
    pub fn generate_token(
        &self,
        player_id: Uuid,
        google_id: &str,
        email: &str,
    ) -> AuthResult<String> {
        let now = Utc::now();
        let exp = now
            + Duration::from_std(self.config.access_token_lifetime)
                .map_err(|e| AuthError::Internal(e.to_string()))?;

        let claims = TokenClaims {
            sub: player_id.to_string(),
            google_id: google_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to encode token: {}", e)))?;

        Ok(token)
    }

    /// Validate a token and return its claims
    pub fn validate_token(&self, token: &str) -> AuthResult<TokenClaims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);
        validation.validate_exp = true;

        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &validation)?;

        Ok(token_data.claims)
    }

    /// Validate a token and build the authenticated-player context
    pub fn authenticate(&self, token: &str) -> AuthResult<AuthenticatedPlayer> {
        let claims = self.validate_token(token)?;
        let player_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthenticatedPlayer {
            player_id,
            google_id: claims.google_id,
            email: claims.email,
        })
    }

    /// Access token lifetime in seconds, for login responses
    pub fn expires_in_secs(&self) -> i64 {
        self.config.access_token_lifetime.as_secs() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration as StdDuration;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-for-jwt-tokens-min-32-bytes!".to_string(),
            access_token_lifetime: StdDuration::from_secs(3600),
            issuer: "test-issuer".to_string(),
            audience: "test-audience".to_string(),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let service = JwtService::new(test_config());
        let player_id = Uuid::new_v4();

        let token = service
            .generate_token(player_id, "104055744437937272058", "player@example.com")
            .unwrap();
        assert!(!token.is_empty());

        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, player_id.to_string());
        assert_eq!(claims.email, "player@example.com");
        assert_eq!(claims.iss, "test-issuer");

        let player = service.authenticate(&token).unwrap();
        assert_eq!(player.player_id, player_id);
        assert_eq!(player.google_id, "104055744437937272058");
    }

    #[test]
    fn test_expired_token_rejected() {
        let mut config = test_config();
        config.access_token_lifetime = StdDuration::from_secs(0);
        let service = JwtService::new(config);

        let token = service
            .generate_token(Uuid::new_v4(), "g", "p@example.com")
            .unwrap();

        // Default validation keeps a 60s leeway; disable it to observe expiry.
        let mut validation = Validation::default();
        validation.set_issuer(&["test-issuer"]);
        validation.set_audience(&["test-audience"]);
        validation.leeway = 0;
        let result = decode::<TokenClaims>(
            &token,
            &DecodingKey::from_secret("test-secret-key-for-jwt-tokens-min-32-bytes!".as_bytes()),
            &validation,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let service = JwtService::new(test_config());
        let other = JwtService::new(JwtConfig {
            issuer: "someone-else".to_string(),
            ..test_config()
        });

        let token = other
            .generate_token(Uuid::new_v4(), "g", "p@example.com")
            .unwrap();
        assert!(matches!(
            service.validate_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = JwtService::new(test_config());
        assert!(service.validate_token("not-a-token").is_err());
    }
}
