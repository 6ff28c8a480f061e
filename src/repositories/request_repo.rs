//! Request repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewRequest, Request, RequestStatus};

/// Request repository holding an async connection pool.
#[derive(Clone)]
pub struct RequestRepository {
    pool: AsyncDbPool,
}

impl RequestRepository {
    /// Creates a new RequestRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Stores a submitted request verbatim.
    pub async fn create(&self, new_request: NewRequest) -> AppResult<Request> {
        use crate::schema::requests::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(requests)
            .values(&new_request)
            .returning(Request::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists a provider's requests, newest first.
    pub async fn list_by_provider(&self, owner_id: i32) -> AppResult<Vec<Request>> {
        use crate::schema::requests::dsl::*;
        let mut conn = self.pool.get().await?;

        requests
            .filter(provider_id.eq(owner_id))
            .order(created_at.desc())
            .select(Request::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Sets the status of a request scoped to its owning provider.
    ///
    /// The update is filtered on both id and provider, so a request owned
    /// by a different provider behaves exactly like a missing one.
    pub async fn update_status(
        &self,
        request_id: i32,
        owner_id: i32,
        new_status: RequestStatus,
    ) -> AppResult<Option<Request>> {
        use crate::schema::requests::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(
            requests
                .filter(id.eq(request_id))
                .filter(provider_id.eq(owner_id)),
        )
        .set(status.eq(new_status))
        .returning(Request::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(AppError::from)
    }
}
