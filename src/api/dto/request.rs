//! Request (customer lead) DTOs for the provider-facing API.

use crate::api::dto::ServiceResponse;
use crate::models::RequestStatus;
use crate::services::RequestWithServices;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for transitioning a request's status.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateRequestStatusRequest {
    pub status: RequestStatus,
}

/// Response body for a request joined with its resolved services.
///
/// `services` holds only the snapshot ids that still resolve; `total` is
/// the sum of their derived prices.
#[derive(Debug, Serialize, ToSchema)]
pub struct RequestResponse {
    pub id: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_note: Option<String>,
    pub status: RequestStatus,
    pub services: Vec<ServiceResponse>,
    pub total: f64,
    pub created_at: String,
}

impl From<RequestWithServices> for RequestResponse {
    fn from(entry: RequestWithServices) -> Self {
        Self {
            id: entry.request.id,
            customer_name: entry.request.customer_name,
            customer_phone: entry.request.customer_phone,
            customer_note: entry.request.customer_note,
            status: entry.request.status,
            services: entry.services.into_iter().map(ServiceResponse::from).collect(),
            total: entry.total,
            created_at: entry
                .request
                .created_at
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
        }
    }
}
