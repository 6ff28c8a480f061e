//! Catalog business logic for categories and services.
//!
//! Wraps the repositories with the rules the handlers rely on: ownership
//! is verified before every mutation, and a service's category must belong
//! to the acting provider both at creation and whenever it is changed.

use crate::error::{AppError, AppResult};
use crate::models::{Category, NewCategory, NewService, Service, UpdateCategory, UpdateService};
use crate::repositories::{CategoryRepository, ServiceRepository};
use crate::services::ownership::authorize_mutation;

/// Category and service operations scoped to the owning provider.
#[derive(Clone)]
pub struct CatalogService {
    categories: CategoryRepository,
    services: ServiceRepository,
}

impl CatalogService {
    /// Creates a new CatalogService with the given repositories.
    pub fn new(categories: CategoryRepository, services: ServiceRepository) -> Self {
        Self {
            categories,
            services,
        }
    }

    // ========================================================================
    // Categories
    // ========================================================================

    /// Lists the acting provider's categories with optional title search.
    ///
    /// # Returns
    /// A tuple of (categories, total_count)
    pub async fn list_categories(
        &self,
        actor_id: i32,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Category>, i64)> {
        self.categories
            .list_by_provider(actor_id, search, offset, limit)
            .await
    }

    /// Gets one of the acting provider's categories.
    ///
    /// # Errors
    /// `NotFound` if the id does not resolve, `Forbidden` if it belongs to
    /// another provider.
    pub async fn get_category(&self, category_id: i32, actor_id: i32) -> AppResult<Category> {
        let category = self.find_category(category_id).await?;
        authorize_mutation(actor_id, category.provider_id)?;
        Ok(category)
    }

    /// Creates a category for the acting provider.
    pub async fn create_category(&self, new_category: NewCategory) -> AppResult<Category> {
        self.categories.create(new_category).await
    }

    /// Updates a category after verifying ownership.
    pub async fn update_category(
        &self,
        category_id: i32,
        actor_id: i32,
        update_data: UpdateCategory,
    ) -> AppResult<Category> {
        let category = self.find_category(category_id).await?;
        authorize_mutation(actor_id, category.provider_id)?;
        self.categories.update(category_id, update_data).await
    }

    /// Deletes a category after verifying ownership.
    ///
    /// Services under the category are not touched; they keep their now
    /// dangling reference and drop out of the public catalog.
    pub async fn delete_category(&self, category_id: i32, actor_id: i32) -> AppResult<()> {
        let category = self.find_category(category_id).await?;
        authorize_mutation(actor_id, category.provider_id)?;
        self.categories.delete(category_id).await?;
        Ok(())
    }

    // ========================================================================
    // Services
    // ========================================================================

    /// Lists the acting provider's services with optional name search and
    /// category filter.
    ///
    /// # Returns
    /// A tuple of (services, total_count)
    pub async fn list_services(
        &self,
        actor_id: i32,
        search: Option<&str>,
        category: Option<i32>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Service>, i64)> {
        self.services
            .list_by_provider(actor_id, search, category, offset, limit)
            .await
    }

    /// Gets one of the acting provider's services.
    pub async fn get_service(&self, service_id: i32, actor_id: i32) -> AppResult<Service> {
        let service = self.find_service(service_id).await?;
        authorize_mutation(actor_id, service.provider_id)?;
        Ok(service)
    }

    /// Creates a service after checking the referenced category belongs to
    /// the acting provider.
    pub async fn create_service(&self, mut new_service: NewService) -> AppResult<Service> {
        self.verify_category_owner(new_service.category_id, new_service.provider_id)
            .await?;
        new_service.name = new_service.name.trim().to_string();
        self.services.create(new_service).await
    }

    /// Updates a service after verifying ownership.
    ///
    /// A changed category reference is re-validated against the acting
    /// provider before the write.
    pub async fn update_service(
        &self,
        service_id: i32,
        actor_id: i32,
        mut update_data: UpdateService,
    ) -> AppResult<Service> {
        let service = self.find_service(service_id).await?;
        authorize_mutation(actor_id, service.provider_id)?;

        if let Some(new_category_id) = update_data.category_id {
            self.verify_category_owner(new_category_id, actor_id).await?;
        }
        update_data.name = update_data.name.map(|n| n.trim().to_string());

        self.services.update(service_id, update_data).await
    }

    /// Deletes a service after verifying ownership.
    pub async fn delete_service(&self, service_id: i32, actor_id: i32) -> AppResult<()> {
        let service = self.find_service(service_id).await?;
        authorize_mutation(actor_id, service.provider_id)?;
        self.services.delete(service_id).await?;
        Ok(())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn find_category(&self, category_id: i32) -> AppResult<Category> {
        self.categories
            .find_by_id(category_id)
            .await?
            .ok_or(AppError::NotFound {
                entity: "category".to_string(),
                field: "id".to_string(),
                value: category_id.to_string(),
            })
    }

    async fn find_service(&self, service_id: i32) -> AppResult<Service> {
        self.services
            .find_by_id(service_id)
            .await?
            .ok_or(AppError::NotFound {
                entity: "service".to_string(),
                field: "id".to_string(),
                value: service_id.to_string(),
            })
    }

    /// Rejects a category reference that does not resolve to a category of
    /// the acting provider. A foreign category is reported the same way as
    /// a missing one.
    async fn verify_category_owner(&self, category_id: i32, actor_id: i32) -> AppResult<()> {
        match self.categories.find_by_id(category_id).await? {
            Some(category) if category.provider_id == actor_id => Ok(()),
            _ => Err(AppError::Validation {
                field: "category_id".to_string(),
                reason: "Invalid category".to_string(),
            }),
        }
    }
}
