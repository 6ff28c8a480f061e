//! Service repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewService, Service, UpdateService};

/// Service repository holding an async connection pool.
#[derive(Clone)]
pub struct ServiceRepository {
    pool: AsyncDbPool,
}

impl ServiceRepository {
    /// Creates a new ServiceRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new service.
    pub async fn create(&self, new_service: NewService) -> AppResult<Service> {
        use crate::schema::services::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(services)
            .values(&new_service)
            .returning(Service::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a service by its ID.
    pub async fn find_by_id(&self, service_id: i32) -> AppResult<Option<Service>> {
        use crate::schema::services::dsl::*;
        let mut conn = self.pool.get().await?;

        services
            .filter(id.eq(service_id))
            .select(Service::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists a provider's services newest-first with optional
    /// case-insensitive name search and category filter, returning the
    /// page and total count.
    pub async fn list_by_provider(
        &self,
        owner_id: i32,
        search: Option<&str>,
        category: Option<i32>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Service>, i64)> {
        use crate::schema::services::dsl::*;
        let mut conn = self.pool.get().await?;

        let mut query = services
            .filter(provider_id.eq(owner_id))
            .select(Service::as_select())
            .into_boxed();
        let mut count_query = services
            .filter(provider_id.eq(owner_id))
            .count()
            .into_boxed();

        if let Some(term) = search {
            let pattern = format!("%{}%", term);
            query = query.filter(name.ilike(pattern.clone()));
            count_query = count_query.filter(name.ilike(pattern));
        }

        if let Some(cat) = category {
            query = query.filter(category_id.eq(cat));
            count_query = count_query.filter(category_id.eq(cat));
        }

        let total: i64 = count_query.get_result(&mut conn).await?;

        let page = query
            .order(created_at.desc())
            .offset(offset)
            .limit(limit)
            .load(&mut conn)
            .await?;

        Ok((page, total))
    }

    /// Lists all of a provider's services (public catalog assembly).
    pub async fn list_all_by_provider(&self, owner_id: i32) -> AppResult<Vec<Service>> {
        use crate::schema::services::dsl::*;
        let mut conn = self.pool.get().await?;

        services
            .filter(provider_id.eq(owner_id))
            .select(Service::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Resolves a set of service ids against current records.
    ///
    /// Ids that no longer exist are simply absent from the result.
    pub async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Service>> {
        use crate::schema::services::dsl::*;
        let mut conn = self.pool.get().await?;

        services
            .filter(id.eq_any(ids))
            .select(Service::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Updates a service.
    pub async fn update(&self, service_id: i32, update_data: UpdateService) -> AppResult<Service> {
        use crate::schema::services::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(services.filter(id.eq(service_id)))
            .set(&update_data)
            .returning(Service::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a service.
    pub async fn delete(&self, service_id: i32) -> AppResult<usize> {
        use crate::schema::services::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(services.filter(id.eq(service_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
