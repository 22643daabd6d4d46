//! Authentication middleware for Axum.
//!
//! Decodes the bearer token on every request and stores the resulting
//! [`AuthenticatedPlayer`] in request extensions. Requests without
//! credentials pass through untouched — each handler decides whether auth
//! is required. Requests with an invalid or expired token are rejected
//! here with 401.

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    response::Response,
};
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

use crate::error::AuthError;
use crate::jwt::JwtService;
use crate::types::AuthenticatedPlayer;

/// Authentication middleware layer
#[derive(Clone)]
pub struct AuthLayer {
    jwt: Arc<JwtService>,
}

impl AuthLayer {
    /// Create a new authentication layer
    pub fn new(jwt: Arc<JwtService>) -> Self {
        Self { jwt }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            inner,
            jwt: self.jwt.clone(),
        }
    }
}

/// Authentication middleware service
#[derive(Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
    jwt: Arc<JwtService>,
}

impl<S> Service<Request> for AuthMiddleware<S>
where
    S: Service<Request, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let jwt = self.jwt.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            match authenticate_request(req.headers(), &jwt) {
                Ok(player) => {
                    req.extensions_mut().insert(player);
                    inner.call(req).await
                }
                Err(AuthError::Unauthenticated) => {
                    // No credentials: handlers decide if that's acceptable.
                    inner.call(req).await
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected bearer token");
                    Ok(unauthorized_response(&e))
                }
            }
        })
    }
}

/// Pull and validate the bearer token from request headers
fn authenticate_request(headers: &HeaderMap, jwt: &JwtService) -> Result<AuthenticatedPlayer, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::Unauthenticated)?;

    let auth_str = auth_header.to_str().map_err(|_| AuthError::InvalidToken)?;
    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or(AuthError::Unauthenticated)?;

    jwt.authenticate(token)
}

fn unauthorized_response(error: &AuthError) -> Response {
    let body = serde_json::json!({
        "success": false,
        "code": -1010,
        "message": error.to_string(),
    });

    Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|_| Response::new(Body::empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use uuid::Uuid;

    fn jwt() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret-key-for-jwt-tokens-min-32-bytes!".to_string(),
            access_token_lifetime: std::time::Duration::from_secs(3600),
            ..Default::default()
        })
    }

    fn headers_with(value: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(v) = value {
            headers.insert(header::AUTHORIZATION, v.parse().unwrap());
        }
        headers
    }

    #[test]
    fn missing_header_is_unauthenticated() {
        let result = authenticate_request(&headers_with(None), &jwt());
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[test]
    fn non_bearer_scheme_is_unauthenticated() {
        let result = authenticate_request(&headers_with(Some("Basic abc")), &jwt());
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[test]
    fn valid_bearer_token_authenticates() {
        let service = jwt();
        let player_id = Uuid::new_v4();
        let token = service
            .generate_token(player_id, "gid", "p@example.com")
            .unwrap();

        let headers = headers_with(Some(&format!("Bearer {}", token)));
        let player = authenticate_request(&headers, &service).unwrap();
        assert_eq!(player.player_id, player_id);
    }

    #[test]
    fn invalid_bearer_token_is_an_error() {
        let result = authenticate_request(&headers_with(Some("Bearer bogus")), &jwt());
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
