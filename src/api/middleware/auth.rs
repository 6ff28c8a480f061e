//! JWT authentication middleware.
//!
//! Validates bearer tokens on the private API surface and injects the
//! acting provider's identity into request extensions. The core trusts
//! this identity completely; every ownership decision downstream compares
//! against it.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt::{Claims, validate_access_token};

/// Extension type for the authenticated provider.
///
/// Added to request extensions after successful authentication and
/// extracted in handlers via `Extension<AuthProvider>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthProvider {
    /// Provider ID from JWT claims
    pub provider_id: i32,
    /// Provider email from JWT claims
    pub email: String,
    /// Company name from JWT claims
    pub company: String,
}

impl From<Claims> for AuthProvider {
    fn from(claims: Claims) -> Self {
        Self {
            provider_id: claims.sub.parse().unwrap_or(0),
            email: claims.email,
            company: claims.company,
        }
    }
}

/// JWT authentication middleware.
///
/// # Headers
/// Expects: `Authorization: Bearer <token>`
///
/// # Errors
/// Returns 401 Unauthorized if the header is missing, malformed, or the
/// token fails validation.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized {
            message: "Missing authorization header".to_string(),
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized {
            message: "Invalid authorization header format. Expected: Bearer <token>".to_string(),
        })?;

    let claims = validate_access_token(token, &state.jwt_config.secret)?;

    let auth_provider = AuthProvider::from(claims);
    request.extensions_mut().insert(auth_provider);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::TokenType;

    #[test]
    fn test_auth_provider_from_claims() {
        let claims = Claims {
            sub: "123".to_string(),
            email: "anna@luxurylooks.example".to_string(),
            company: "Luxury Looks".to_string(),
            token_type: TokenType::Access,
            iat: 0,
            exp: 9999999999,
        };

        let auth_provider = AuthProvider::from(claims);
        assert_eq!(auth_provider.provider_id, 123);
        assert_eq!(auth_provider.email, "anna@luxurylooks.example");
        assert_eq!(auth_provider.company, "Luxury Looks");
    }

    #[test]
    fn test_auth_provider_from_claims_invalid_id() {
        let claims = Claims {
            sub: "invalid".to_string(),
            email: "anna@luxurylooks.example".to_string(),
            company: "Luxury Looks".to_string(),
            token_type: TokenType::Access,
            iat: 0,
            exp: 9999999999,
        };

        let auth_provider = AuthProvider::from(claims);
        assert_eq!(auth_provider.provider_id, 0); // Falls back to 0 on parse error
    }
}
