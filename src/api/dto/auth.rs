//! Authentication and provider-profile DTOs.

use crate::models::Provider;
use crate::services::Registration;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for registering a new provider.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, max = 100, message = "Company name is required"))]
    pub company_name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email")]
    pub email: String,
    #[validate(length(min = 1, max = 50, message = "Phone is required"))]
    pub phone: String,
    #[validate(length(min = 6, max = 72, message = "Password must be between 6 and 72 characters"))]
    #[schema(format = "password", min_length = 6, max_length = 72)]
    pub password: String,
    /// Explicit public slug; derived from the company name when omitted
    pub slug: Option<String>,
}

impl RegisterRequest {
    /// Converts the request DTO into registration data for the service layer.
    pub fn into_registration(self) -> Registration {
        Registration {
            full_name: self.full_name,
            company_name: self.company_name,
            email: self.email,
            phone: self.phone,
            password: self.password,
            slug: self.slug,
        }
    }
}

/// Request body for provider login.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(format = "password")]
    pub password: String,
}

/// Request body for refreshing an access token.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Provider profile (excludes the password hash).
#[derive(Debug, Serialize, ToSchema)]
pub struct ProviderResponse {
    pub id: i32,
    pub full_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub slug: String,
    pub created_at: String,
}

impl From<Provider> for ProviderResponse {
    fn from(provider: Provider) -> Self {
        Self {
            id: provider.id,
            full_name: provider.full_name,
            company_name: provider.company_name,
            email: provider.email,
            phone: provider.phone,
            slug: provider.slug,
            created_at: provider
                .created_at
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
        }
    }
}

/// Response body for a successful login.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub provider: ProviderResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// Response body for a successful registration.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub provider: ProviderResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// Response body for a token refresh.
#[derive(Debug, Serialize, ToSchema)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}
