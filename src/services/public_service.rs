//! Public catalog assembly.
//!
//! Builds the anonymous-facing nested catalog for one provider: active
//! categories with their services grouped underneath. Read-only; never
//! exposes credentials or other private provider fields (the response
//! mapping in the DTO layer selects the public subset).

use crate::error::{AppError, AppResult};
use crate::models::{Category, Provider, Service};
use crate::repositories::{CategoryRepository, ProviderRepository, ServiceRepository};

/// One catalog section: a category and the services grouped under it.
///
/// Categories without services are kept, with an empty service list.
#[derive(Debug, Clone)]
pub struct CatalogSection {
    pub category: Category,
    pub services: Vec<Service>,
}

/// Assembles the public catalog view for a provider.
#[derive(Clone)]
pub struct PublicCatalogService {
    providers: ProviderRepository,
    categories: CategoryRepository,
    services: ServiceRepository,
}

impl PublicCatalogService {
    /// Creates a new PublicCatalogService with the given repositories.
    pub fn new(
        providers: ProviderRepository,
        categories: CategoryRepository,
        services: ServiceRepository,
    ) -> Self {
        Self {
            providers,
            categories,
            services,
        }
    }

    /// Builds the catalog for a provider addressed by numeric id.
    pub async fn catalog_by_id(
        &self,
        provider_id: i32,
    ) -> AppResult<(Provider, Vec<CatalogSection>)> {
        let provider = self
            .providers
            .find_by_id(provider_id)
            .await?
            .ok_or_else(|| provider_not_found("id", provider_id.to_string()))?;
        self.assemble(provider).await
    }

    /// Builds the catalog for a provider addressed by slug.
    pub async fn catalog_by_slug(
        &self,
        slug: &str,
    ) -> AppResult<(Provider, Vec<CatalogSection>)> {
        let provider = self
            .providers
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| provider_not_found("slug", slug.to_string()))?;
        self.assemble(provider).await
    }

    /// Fetches the provider's active categories and all services, then
    /// groups services under their category.
    async fn assemble(&self, provider: Provider) -> AppResult<(Provider, Vec<CatalogSection>)> {
        let categories = self.categories.list_active_by_provider(provider.id).await?;
        let services = self.services.list_all_by_provider(provider.id).await?;
        let catalog = group_by_category(categories, services);
        Ok((provider, catalog))
    }
}

fn provider_not_found(field: &str, value: String) -> AppError {
    AppError::NotFound {
        entity: "provider".to_string(),
        field: field.to_string(),
        value,
    }
}

/// Groups services under their category by id equality.
///
/// Services whose category is not in the list (inactive or deleted) are
/// dropped from the public view; empty categories are kept.
pub fn group_by_category(
    categories: Vec<Category>,
    services: Vec<Service>,
) -> Vec<CatalogSection> {
    categories
        .into_iter()
        .map(|category| {
            let grouped: Vec<Service> = services
                .iter()
                .filter(|s| s.category_id == category.id)
                .cloned()
                .collect();
            CatalogSection {
                category,
                services: grouped,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryStatus;

    fn category(id: i32, title: &str) -> Category {
        let now = chrono::NaiveDateTime::default();
        Category {
            id,
            provider_id: 1,
            title: title.to_string(),
            description: None,
            image: None,
            status: CategoryStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    fn service(id: i32, category_id: i32, name: &str) -> Service {
        let now = chrono::NaiveDateTime::default();
        Service {
            id,
            provider_id: 1,
            category_id,
            name: name.to_string(),
            base_price: 50.0,
            vat_percent: Some(15.0),
            discount_amount: Some(5.0),
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_services_grouped_under_their_category() {
        let categories = vec![category(1, "Hair Services"), category(2, "Nails")];
        let services = vec![
            service(10, 1, "Haircut"),
            service(11, 2, "Manicure"),
            service(12, 1, "Coloring"),
        ];

        let catalog = group_by_category(categories, services);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].category.title, "Hair Services");
        assert_eq!(catalog[0].services.len(), 2);
        assert_eq!(catalog[1].services.len(), 1);
        assert_eq!(catalog[1].services[0].name, "Manicure");
    }

    #[test]
    fn test_empty_category_is_kept() {
        let categories = vec![category(1, "Hair Services"), category(2, "Empty")];
        let services = vec![service(10, 1, "Haircut")];

        let catalog = group_by_category(categories, services);

        assert_eq!(catalog.len(), 2);
        assert!(catalog[1].services.is_empty());
    }

    #[test]
    fn test_service_without_listed_category_is_dropped() {
        // Category 99 is not in the list (inactive or deleted), so its
        // service appears nowhere in the public view.
        let categories = vec![category(1, "Hair Services")];
        let services = vec![service(10, 1, "Haircut"), service(11, 99, "Orphan")];

        let catalog = group_by_category(categories, services);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].services.len(), 1);
        assert_eq!(catalog[0].services[0].name, "Haircut");
    }
}
