//! Provider account business logic.
//!
//! Registration derives the public catalog slug from the company name when
//! none is supplied and hashes the password before storage; login verifies
//! credentials and issues a token pair.

use crate::error::{AppError, AppResult};
use crate::models::{NewProvider, Provider};
use crate::repositories::ProviderRepository;
use crate::utils::jwt::generate_token_pair;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::slug::slugify;

/// Registration data accepted from the API layer (already validated).
#[derive(Debug, Clone)]
pub struct Registration {
    pub full_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub slug: Option<String>,
}

/// Provider account service.
#[derive(Clone)]
pub struct ProviderService {
    repo: ProviderRepository,
}

impl ProviderService {
    /// Creates a new ProviderService with the given repository.
    pub fn new(repo: ProviderRepository) -> Self {
        Self { repo }
    }

    /// Registers a new provider.
    ///
    /// The slug is normalized from the company name when not supplied
    /// explicitly; uniqueness of email and slug is left to the database
    /// and surfaces as `Duplicate`.
    pub async fn register(&self, registration: Registration) -> AppResult<Provider> {
        let slug = match registration.slug {
            Some(explicit) => slugify(&explicit),
            None => slugify(&registration.company_name),
        };
        if slug.is_empty() {
            return Err(AppError::Validation {
                field: "company_name".to_string(),
                reason: "Company name does not produce a usable slug".to_string(),
            });
        }

        let new_provider = NewProvider {
            full_name: registration.full_name,
            company_name: registration.company_name,
            email: registration.email,
            phone: registration.phone,
            password: hash_password(&registration.password)?,
            slug,
        };

        self.repo.create(new_provider).await
    }

    /// Authenticates a provider and issues an access/refresh token pair.
    ///
    /// # Errors
    /// `Unauthorized` on unknown email or wrong password, without saying
    /// which one it was.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
        jwt_secret: &str,
        access_expiration_hours: i64,
        refresh_expiration_hours: i64,
    ) -> AppResult<(Provider, String, String)> {
        let provider =
            self.repo
                .find_by_email(email)
                .await?
                .ok_or_else(|| AppError::Unauthorized {
                    message: "Invalid credentials".to_string(),
                })?;

        if !verify_password(password, &provider.password)? {
            return Err(AppError::Unauthorized {
                message: "Invalid credentials".to_string(),
            });
        }

        let (access_token, refresh_token) = generate_token_pair(
            provider.id,
            provider.email.clone(),
            provider.company_name.clone(),
            jwt_secret,
            access_expiration_hours,
            refresh_expiration_hours,
        )?;

        Ok((provider, access_token, refresh_token))
    }

    /// Gets a provider by id.
    pub async fn get_provider(&self, id: i32) -> AppResult<Provider> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound {
            entity: "provider".to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        })
    }
}
