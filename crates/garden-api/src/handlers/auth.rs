//! Authentication handlers: Google sign-in and profile echo

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::dto::{
    ApiResponse, AuthStatusResponse, GoogleLoginRequest, LoginPlayerSummary, LoginResponse,
    ProfileResponse,
};
use crate::error::{ApiError, ApiResult};
use crate::extractors::{CurrentPlayer, ValidatedJson};
use crate::handlers::players::register_player;
use crate::state::AppState;

/// Sign in with a Google ID token
///
/// Verifies the token, finds or creates the player, and returns a bearer
/// token for the game session.
#[utoipa::path(
    post,
    path = "/api/v1/auth/google",
    tag = "Authentication",
    request_body = GoogleLoginRequest,
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 401, description = "Google rejected the token"),
        (status = 503, description = "Google verification unavailable")
    )
)]
pub async fn google_login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<GoogleLoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    let profile = state.auth.google.verify_id_token(&request.id_token).await?;

    let repo = state.db.player_repo();
    let (player, is_new_player) = match repo.find_by_google_id(&profile.google_id).await? {
        Some(existing) => {
            repo.touch_last_login(existing.id).await?;
            (existing, false)
        }
        None => {
            let created =
                register_player(&state, &profile.google_id, &profile.email, &profile.name).await?;
            (created, true)
        }
    };

    let access_token = state
        .auth
        .jwt
        .generate_token(player.id, &player.google_id, &player.email)
        .map_err(ApiError::from)?;

    tracing::info!(
        player_id = %player.id,
        is_new_player = is_new_player,
        "Google sign-in completed"
    );

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth.jwt.expires_in_secs(),
        is_new_player,
        user: LoginPlayerSummary {
            id: player.id,
            email: player.email,
            name: player.name,
            gold: player.gold,
            total_earnings: player.total_earnings,
            total_trees_sold: player.total_trees_sold,
        },
    })))
}

/// Get the authenticated profile from the bearer token
#[utoipa::path(
    get,
    path = "/api/v1/auth/profile",
    tag = "Authentication",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Token claims", body = ProfileResponse),
        (status = 401, description = "Invalid or missing token")
    )
)]
pub async fn get_profile(player: CurrentPlayer) -> Json<ApiResponse<ProfileResponse>> {
    Json(ApiResponse::ok(ProfileResponse {
        player_id: player.player_id,
        google_id: player.google_id,
        email: player.email,
    }))
}

/// Check authentication service status
#[utoipa::path(
    get,
    path = "/api/v1/auth/status",
    tag = "Authentication",
    responses(
        (status = 200, description = "Auth service status", body = AuthStatusResponse)
    )
)]
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<ApiResponse<AuthStatusResponse>> {
    Json(ApiResponse::with_message(
        AuthStatusResponse {
            google_oauth_configured: state.auth.google.is_configured(),
        },
        "Auth service is running",
    ))
}
