//! Repository layer for data access operations.
//!
//! Provides async CRUD operations and provider-scoped queries for all
//! domain entities.

mod category_repo;
mod provider_repo;
mod request_repo;
mod service_repo;

pub use category_repo::CategoryRepository;
pub use provider_repo::ProviderRepository;
pub use request_repo::RequestRepository;
pub use service_repo::ServiceRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub providers: ProviderRepository,
    pub categories: CategoryRepository,
    pub services: ServiceRepository,
    pub requests: RequestRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            providers: ProviderRepository::new(pool.clone()),
            categories: CategoryRepository::new(pool.clone()),
            services: ServiceRepository::new(pool.clone()),
            requests: RequestRepository::new(pool),
        }
    }
}
