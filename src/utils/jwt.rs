use crate::error::{AppError, AppResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Token type enumeration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Access token for API authentication (short-lived)
    Access,
    /// Refresh token for obtaining new access tokens (long-lived)
    Refresh,
}

/// JWT claims carrying the authenticated provider's identity.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (provider ID)
    pub sub: String,
    /// Provider contact email
    pub email: String,
    /// Provider company name
    pub company: String,
    /// Token type (access or refresh)
    pub token_type: TokenType,
    /// Issued at (timestamp)
    pub iat: i64,
    /// Expiration time (timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a provider.
    pub fn new(
        provider_id: i32,
        email: String,
        company: String,
        token_type: TokenType,
        expiration_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: provider_id.to_string(),
            email,
            company,
            token_type,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }
}

/// Generates a signed JWT for a provider.
pub fn generate_token(
    provider_id: i32,
    email: String,
    company: String,
    token_type: TokenType,
    secret: &str,
    expiration_hours: i64,
) -> AppResult<String> {
    let claims = Claims::new(provider_id, email, company, token_type, expiration_hours);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to generate JWT token: {}", e),
    })
}

/// Generates an access token (short-lived).
pub fn generate_access_token(
    provider_id: i32,
    email: String,
    company: String,
    secret: &str,
    expiration_hours: i64,
) -> AppResult<String> {
    generate_token(
        provider_id,
        email,
        company,
        TokenType::Access,
        secret,
        expiration_hours,
    )
}

/// Generates a refresh token (long-lived).
pub fn generate_refresh_token(
    provider_id: i32,
    email: String,
    company: String,
    secret: &str,
    expiration_hours: i64,
) -> AppResult<String> {
    generate_token(
        provider_id,
        email,
        company,
        TokenType::Refresh,
        secret,
        expiration_hours,
    )
}

/// Generates both access and refresh tokens.
///
/// # Returns
/// A tuple of (access_token, refresh_token)
pub fn generate_token_pair(
    provider_id: i32,
    email: String,
    company: String,
    secret: &str,
    access_expiration_hours: i64,
    refresh_expiration_hours: i64,
) -> AppResult<(String, String)> {
    let access_token = generate_access_token(
        provider_id,
        email.clone(),
        company.clone(),
        secret,
        access_expiration_hours,
    )?;

    let refresh_token =
        generate_refresh_token(provider_id, email, company, secret, refresh_expiration_hours)?;

    Ok((access_token, refresh_token))
}

/// Validates and decodes a JWT, optionally checking the token type.
pub fn validate_token(
    token: &str,
    secret: &str,
    expected_type: Option<TokenType>,
) -> AppResult<Claims> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::Unauthorized {
            message: "Token has expired".to_string(),
        },
        jsonwebtoken::errors::ErrorKind::InvalidToken => AppError::Unauthorized {
            message: "Invalid token".to_string(),
        },
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AppError::Unauthorized {
            message: "Invalid token signature".to_string(),
        },
        _ => AppError::Unauthorized {
            message: format!("Token validation failed: {}", e),
        },
    })?;

    if let Some(expected) = expected_type {
        if claims.token_type != expected {
            return Err(AppError::Unauthorized {
                message: format!(
                    "Invalid token type: expected {:?}, got {:?}",
                    expected, claims.token_type
                ),
            });
        }
    }

    Ok(claims)
}

/// Validates an access token.
pub fn validate_access_token(token: &str, secret: &str) -> AppResult<Claims> {
    validate_token(token, secret, Some(TokenType::Access))
}

/// Validates a refresh token.
pub fn validate_refresh_token(token: &str, secret: &str) -> AppResult<Claims> {
    validate_token(token, secret, Some(TokenType::Refresh))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test_secret_key_for_jwt_testing";

    #[test]
    fn test_generate_token() {
        let token = generate_token(
            1,
            "anna@luxurylooks.example".to_string(),
            "Luxury Looks".to_string(),
            TokenType::Access,
            TEST_SECRET,
            24,
        );

        assert!(token.is_ok());
        let token_str = token.unwrap();
        assert!(!token_str.is_empty());
        assert!(token_str.contains('.'));
    }

    #[test]
    fn test_generate_token_pair() {
        let result = generate_token_pair(
            1,
            "anna@luxurylooks.example".to_string(),
            "Luxury Looks".to_string(),
            TEST_SECRET,
            1,
            168,
        );

        assert!(result.is_ok());
        let (access_token, refresh_token) = result.unwrap();
        assert!(!access_token.is_empty());
        assert!(!refresh_token.is_empty());
        assert_ne!(access_token, refresh_token);
    }

    #[test]
    fn test_validate_token_success() {
        let token = generate_token(
            7,
            "anna@luxurylooks.example".to_string(),
            "Luxury Looks".to_string(),
            TokenType::Access,
            TEST_SECRET,
            24,
        )
        .unwrap();

        let claims = validate_token(&token, TEST_SECRET, None).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.email, "anna@luxurylooks.example");
        assert_eq!(claims.company, "Luxury Looks");
        assert_eq!(claims.token_type, TokenType::Access);
    }

    #[test]
    fn test_validate_wrong_token_type() {
        let access_token = generate_access_token(
            1,
            "anna@luxurylooks.example".to_string(),
            "Luxury Looks".to_string(),
            TEST_SECRET,
            1,
        )
        .unwrap();

        // Try to validate an access token as a refresh token
        let result = validate_refresh_token(&access_token, TEST_SECRET);
        assert!(result.is_err());

        if let Err(AppError::Unauthorized { message }) = result {
            assert!(message.contains("Invalid token type"));
        } else {
            panic!("Expected Unauthorized error for wrong token type");
        }
    }

    #[test]
    fn test_validate_token_invalid_secret() {
        let token = generate_token(
            1,
            "anna@luxurylooks.example".to_string(),
            "Luxury Looks".to_string(),
            TokenType::Access,
            TEST_SECRET,
            24,
        )
        .unwrap();

        let result = validate_token(&token, "wrong_secret", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_expired_token() {
        let token = generate_token(
            1,
            "anna@luxurylooks.example".to_string(),
            "Luxury Looks".to_string(),
            TokenType::Access,
            TEST_SECRET,
            -1, // already expired
        )
        .unwrap();

        let result = validate_token(&token, TEST_SECRET, None);
        assert!(result.is_err());

        if let Err(AppError::Unauthorized { message }) = result {
            assert!(message.contains("expired"));
        } else {
            panic!("Expected Unauthorized error for expired token");
        }
    }

    #[test]
    fn test_claims_structure() {
        let claims = Claims::new(
            42,
            "anna@luxurylooks.example".to_string(),
            "Luxury Looks".to_string(),
            TokenType::Refresh,
            24,
        );

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.token_type, TokenType::Refresh);
        assert!(claims.exp > claims.iat);
    }
}
