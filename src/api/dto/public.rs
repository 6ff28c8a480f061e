//! DTOs for the anonymous public boundary: catalog display and request
//! submission.

use crate::api::dto::ServiceResponse;
use crate::models::Provider;
use crate::services::CatalogSection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for submitting a customer request.
///
/// The provider and service ids are stored as given; only the customer
/// contact fields are validated here.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SubmitRequestRequest {
    pub provider_id: i32,
    #[serde(default)]
    pub service_ids: Vec<i32>,
    #[validate(length(min = 1, max = 255, message = "Customer name is required"))]
    pub customer_name: String,
    #[validate(length(min = 1, max = 50, message = "Customer phone is required"))]
    pub customer_phone: String,
    pub customer_note: Option<String>,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body after a successful request submission.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitRequestResponse {
    pub message: String,
    pub request_id: i32,
}

/// Public subset of a provider's profile.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProviderSummary {
    pub full_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
}

impl From<&Provider> for ProviderSummary {
    fn from(provider: &Provider) -> Self {
        Self {
            full_name: provider.full_name.clone(),
            company_name: provider.company_name.clone(),
            email: provider.email.clone(),
            phone: provider.phone.clone(),
        }
    }
}

/// One public catalog section: category fields plus its services.
#[derive(Debug, Serialize, ToSchema)]
pub struct PublicCategory {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub services: Vec<ServiceResponse>,
}

impl From<CatalogSection> for PublicCategory {
    fn from(section: CatalogSection) -> Self {
        Self {
            id: section.category.id,
            title: section.category.title,
            description: section.category.description,
            image: section.category.image,
            services: section
                .services
                .into_iter()
                .map(ServiceResponse::from)
                .collect(),
        }
    }
}

/// The complete public catalog page payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct PublicCatalogResponse {
    pub provider: ProviderSummary,
    pub catalog: Vec<PublicCategory>,
}

impl PublicCatalogResponse {
    /// Builds the payload from the assembled provider and sections.
    pub fn new(provider: &Provider, sections: Vec<CatalogSection>) -> Self {
        Self {
            provider: ProviderSummary::from(provider),
            catalog: sections.into_iter().map(PublicCategory::from).collect(),
        }
    }
}
