//! Category repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Category, CategoryStatus, NewCategory, UpdateCategory};

/// Category repository holding an async connection pool.
#[derive(Clone)]
pub struct CategoryRepository {
    pool: AsyncDbPool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new category.
    pub async fn create(&self, new_category: NewCategory) -> AppResult<Category> {
        use crate::schema::categories::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(categories)
            .values(&new_category)
            .returning(Category::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a category by its ID.
    pub async fn find_by_id(&self, category_id: i32) -> AppResult<Option<Category>> {
        use crate::schema::categories::dsl::*;
        let mut conn = self.pool.get().await?;

        categories
            .filter(id.eq(category_id))
            .select(Category::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists a provider's categories newest-first, with an optional
    /// case-insensitive title search, returning the page and total count.
    pub async fn list_by_provider(
        &self,
        owner_id: i32,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Category>, i64)> {
        use crate::schema::categories::dsl::*;
        let mut conn = self.pool.get().await?;

        let mut query = categories
            .filter(provider_id.eq(owner_id))
            .select(Category::as_select())
            .into_boxed();
        let mut count_query = categories
            .filter(provider_id.eq(owner_id))
            .count()
            .into_boxed();

        if let Some(term) = search {
            let pattern = format!("%{}%", term);
            query = query.filter(title.ilike(pattern.clone()));
            count_query = count_query.filter(title.ilike(pattern));
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

    /// Lists a provider's active categories (public catalog view).
    pub async fn list_active_by_provider(&self, owner_id: i32) -> AppResult<Vec<Category>> {
        use crate::schema::categories::dsl::*;
        let mut conn = self.pool.get().await?;

        categories
            .filter(provider_id.eq(owner_id))
            .filter(status.eq(CategoryStatus::Active))
            .select(Category::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Updates a category.
    pub async fn update(
        &self,
        category_id: i32,
        update_data: UpdateCategory,
    ) -> AppResult<Category> {
        use crate::schema::categories::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(categories.filter(id.eq(category_id)))
            .set(&update_data)
            .returning(Category::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a category outright. Services under it are left in place
    /// with a dangling category reference.
    pub async fn delete(&self, category_id: i32) -> AppResult<usize> {
        use crate::schema::categories::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(categories.filter(id.eq(category_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
