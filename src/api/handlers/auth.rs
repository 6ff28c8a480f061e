//! Authentication handlers for provider registration, login, and token
//! management.

use axum::{Extension, Json, extract::State, http::StatusCode};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::AUTH_TAG;
use crate::api::dto::{
    LoginRequest, LoginResponse, ProviderResponse, RefreshTokenRequest, RefreshTokenResponse,
    RegisterRequest, RegisterResponse,
};
use crate::api::middleware::AuthProvider;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::jwt::{generate_token_pair, validate_refresh_token};
use crate::utils::validate::ValidatedJson;

/// Creates the authentication routes.
///
/// # Routes
/// - `POST /register` - Register a new provider and get tokens
/// - `POST /login` - Authenticate a provider and get tokens
/// - `POST /refresh` - Refresh the access token using a refresh token
pub fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(register))
        .routes(routes!(login))
        .routes(routes!(refresh_token))
}

/// Creates the authenticated profile routes (mounted behind the auth
/// middleware).
///
/// # Routes
/// - `GET /me` - Current provider profile
pub fn profile_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(me))
}

/// POST /api/auth/register - Register a new provider
///
/// Creates the provider account, derives the public slug from the company
/// name when none is given, and returns JWT tokens.
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Provider registered successfully", body = RegisterResponse),
        (status = 400, description = "Invalid request data"),
        (status = 409, description = "Email or slug already taken")
    )
)]
async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let provider = state
        .services
        .providers
        .register(payload.into_registration())
        .await?;

    let (access_token, refresh_token) = generate_token_pair(
        provider.id,
        provider.email.clone(),
        provider.company_name.clone(),
        &state.jwt_config.secret,
        state.jwt_config.access_token_expiration,
        state.jwt_config.refresh_token_expiration,
    )?;

    let response = RegisterResponse {
        provider: provider.into(),
        access_token,
        refresh_token,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login - Authenticate a provider
///
/// Authenticates with email and password, returns JWT tokens.
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<(StatusCode, Json<LoginResponse>)> {
    let (provider, access_token, refresh_token) = state
        .services
        .providers
        .authenticate(
            &payload.email,
            &payload.password,
            &state.jwt_config.secret,
            state.jwt_config.access_token_expiration,
            state.jwt_config.refresh_token_expiration,
        )
        .await?;

    let response = LoginResponse {
        provider: provider.into(),
        access_token,
        refresh_token,
    };

    Ok((StatusCode::OK, Json(response)))
}

/// POST /api/auth/refresh - Refresh access token
///
/// Validates the refresh token and issues new access and refresh tokens.
#[utoipa::path(
    post,
    path = "/refresh",
    tag = AUTH_TAG,
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Tokens refreshed successfully", body = RefreshTokenResponse),
        (status = 401, description = "Invalid or expired refresh token")
    )
)]
async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RefreshTokenRequest>,
) -> AppResult<Json<RefreshTokenResponse>> {
    let claims = validate_refresh_token(&payload.refresh_token, &state.jwt_config.secret)?;

    let provider_id: i32 =
        claims
            .sub
            .parse()
            .map_err(|_| crate::error::AppError::Unauthorized {
                message: "Invalid provider ID in token".to_string(),
            })?;

    // Verify the provider still exists
    let provider = state.services.providers.get_provider(provider_id).await?;

    let (access_token, refresh_token) = generate_token_pair(
        provider.id,
        provider.email.clone(),
        provider.company_name.clone(),
        &state.jwt_config.secret,
        state.jwt_config.access_token_expiration,
        state.jwt_config.refresh_token_expiration,
    )?;

    let response = RefreshTokenResponse {
        access_token,
        refresh_token,
    };

    Ok(Json(response))
}

/// GET /api/me - Current provider profile
///
/// Returns the authenticated provider's own profile.
#[utoipa::path(
    get,
    path = "/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current provider profile", body = ProviderResponse),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearerAuth" = []))
)]
async fn me(
    State(state): State<AppState>,
    Extension(auth_provider): Extension<AuthProvider>,
) -> AppResult<Json<ProviderResponse>> {
    let provider = state
        .services
        .providers
        .get_provider(auth_provider.provider_id)
        .await?;
    Ok(Json(provider.into()))
}
