//! Provider repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewProvider, Provider};

/// Provider repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment).
#[derive(Clone)]
pub struct ProviderRepository {
    pool: AsyncDbPool,
}

impl ProviderRepository {
    /// Creates a new ProviderRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new provider in the database.
    ///
    /// Uniqueness of email and slug is enforced by the database; violations
    /// surface as `AppError::Duplicate`.
    pub async fn create(&self, new_provider: NewProvider) -> AppResult<Provider> {
        use crate::schema::providers::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(providers)
            .values(&new_provider)
            .returning(Provider::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a provider by their ID.
    pub async fn find_by_id(&self, provider_id: i32) -> AppResult<Option<Provider>> {
        use crate::schema::providers::dsl::*;
        let mut conn = self.pool.get().await?;

        providers
            .filter(id.eq(provider_id))
            .select(Provider::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Finds a provider by their contact email.
    pub async fn find_by_email(&self, provider_email: &str) -> AppResult<Option<Provider>> {
        use crate::schema::providers::dsl::*;
        let mut conn = self.pool.get().await?;

        providers
            .filter(email.eq(provider_email))
            .select(Provider::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Finds a provider by their public catalog slug.
    pub async fn find_by_slug(&self, provider_slug: &str) -> AppResult<Option<Provider>> {
        use crate::schema::providers::dsl::*;
        let mut conn = self.pool.get().await?;

        providers
            .filter(slug.eq(provider_slug))
            .select(Provider::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}
