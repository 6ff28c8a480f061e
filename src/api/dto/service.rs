//! Service-related DTOs for API requests and responses.

use crate::models::{NewService, Service, UpdateService};
use crate::services::pricing;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a service.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    pub category_id: i32,
    #[validate(range(min = 0.0, message = "Base price must not be negative"))]
    pub base_price: f64,
    pub vat_percent: Option<f64>,
    pub discount_amount: Option<f64>,
    /// Opaque image reference (URL or embedded data)
    pub image: Option<String>,
}

impl CreateServiceRequest {
    /// Converts the request DTO into a NewService for the acting provider.
    pub fn into_new_service(self, provider_id: i32) -> NewService {
        NewService {
            provider_id,
            category_id: self.category_id,
            name: self.name,
            base_price: self.base_price,
            vat_percent: self.vat_percent,
            discount_amount: self.discount_amount,
            image: self.image,
        }
    }
}

/// Request body for updating a service.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateServiceRequest {
    #[validate(length(min = 1, max = 255, message = "Name cannot be empty"))]
    pub name: Option<String>,
    pub category_id: Option<i32>,
    #[validate(range(min = 0.0, message = "Base price must not be negative"))]
    pub base_price: Option<f64>,
    pub vat_percent: Option<f64>,
    pub discount_amount: Option<f64>,
    pub image: Option<String>,
}

impl UpdateServiceRequest {
    /// Converts the request DTO into an UpdateService changeset.
    pub fn into_update_service(self) -> UpdateService {
        UpdateService {
            category_id: self.category_id,
            name: self.name,
            base_price: self.base_price,
            vat_percent: self.vat_percent,
            discount_amount: self.discount_amount,
            image: self.image,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for service data.
///
/// `total_price` is derived on the way out and never stored.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceResponse {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub base_price: f64,
    pub vat_percent: f64,
    pub discount_amount: f64,
    pub total_price: f64,
    pub image: Option<String>,
    pub created_at: String,
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        let total_price = pricing::total_of(&service);
        Self {
            id: service.id,
            category_id: service.category_id,
            name: service.name,
            base_price: service.base_price,
            vat_percent: service.vat_percent.unwrap_or(0.0),
            discount_amount: service.discount_amount.unwrap_or(0.0),
            total_price,
            image: service.image,
            created_at: service
                .created_at
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_carries_computed_total() {
        let now = chrono::NaiveDateTime::default();
        let service = Service {
            id: 1,
            provider_id: 1,
            category_id: 2,
            name: "Haircut".to_string(),
            base_price: 50.0,
            vat_percent: Some(15.0),
            discount_amount: Some(5.0),
            image: None,
            created_at: now,
            updated_at: now,
        };

        let response = ServiceResponse::from(service);
        assert_eq!(response.total_price, 52.5);
        assert_eq!(response.vat_percent, 15.0);
    }
}
