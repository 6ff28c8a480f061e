//! Service layer for business logic operations.
//!
//! Services encapsulate the catalog's rules (ownership, pricing, category
//! consistency, request aggregation) and coordinate between repositories
//! and handlers.

mod catalog_service;
pub mod ownership;
pub mod pricing;
mod provider_service;
mod public_service;
mod request_service;

pub use catalog_service::CatalogService;
pub use provider_service::{ProviderService, Registration};
pub use public_service::{CatalogSection, PublicCatalogService, group_by_category};
pub use request_service::{RequestService, RequestWithServices, resolve_request};

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub providers: ProviderService,
    pub catalog: CatalogService,
    pub public_catalog: PublicCatalogService,
    pub requests: RequestService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            providers: ProviderService::new(repos.providers.clone()),
            catalog: CatalogService::new(repos.categories.clone(), repos.services.clone()),
            public_catalog: PublicCatalogService::new(
                repos.providers,
                repos.categories,
                repos.services.clone(),
            ),
            requests: RequestService::new(repos.requests, repos.services),
        }
    }
}
