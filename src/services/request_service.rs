//! Customer request intake and provider-facing aggregation.
//!
//! Intake is the public trust boundary: the submitted provider id and
//! service id list are stored verbatim without existence checks. Integrity
//! is enforced at read time instead; aggregation resolves the snapshot
//! against current service records and tolerates anything that changed or
//! disappeared in between.

use std::collections::HashMap;

use crate::error::{AppError, AppResult};
use crate::models::{NewRequest, Request, RequestStatus, Service};
use crate::repositories::{RequestRepository, ServiceRepository};
use crate::services::pricing;

/// A request joined with its currently resolvable services and their
/// summed total.
#[derive(Debug, Clone)]
pub struct RequestWithServices {
    pub request: Request,
    pub services: Vec<Service>,
    pub total: f64,
}

/// Request operations: public intake and provider-scoped aggregation.
#[derive(Clone)]
pub struct RequestService {
    requests: RequestRepository,
    services: ServiceRepository,
}

impl RequestService {
    /// Creates a new RequestService with the given repositories.
    pub fn new(requests: RequestRepository, services: ServiceRepository) -> Self {
        Self { requests, services }
    }

    /// Records a customer's submission.
    ///
    /// Every request starts pending. The ids are not verified against
    /// existing records.
    pub async fn submit(
        &self,
        provider_id: i32,
        service_ids: Vec<i32>,
        customer_name: String,
        customer_phone: String,
        customer_note: Option<String>,
    ) -> AppResult<Request> {
        let new_request = NewRequest {
            provider_id,
            customer_name,
            customer_phone,
            customer_note,
            service_ids,
            status: RequestStatus::Pending,
        };
        self.requests.create(new_request).await
    }

    /// Lists the provider's requests newest-first, each joined with its
    /// currently resolvable services and a computed total.
    pub async fn list_with_totals(&self, owner_id: i32) -> AppResult<Vec<RequestWithServices>> {
        let requests = self.requests.list_by_provider(owner_id).await?;

        let mut ids: Vec<i32> = requests
            .iter()
            .flat_map(|r| r.service_ids.iter().copied())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        let resolved = if ids.is_empty() {
            Vec::new()
        } else {
            self.services.find_by_ids(&ids).await?
        };
        let by_id: HashMap<i32, Service> = resolved.into_iter().map(|s| (s.id, s)).collect();

        Ok(requests
            .into_iter()
            .map(|request| resolve_request(request, &by_id))
            .collect())
    }

    /// Transitions a request's status on behalf of its owning provider and
    /// returns it in the same joined shape as the listing.
    ///
    /// # Errors
    /// `NotFound` when the id does not resolve within the provider's own
    /// requests (a foreign request is indistinguishable from a missing one).
    pub async fn update_status(
        &self,
        request_id: i32,
        owner_id: i32,
        new_status: RequestStatus,
    ) -> AppResult<RequestWithServices> {
        let request = self
            .requests
            .update_status(request_id, owner_id, new_status)
            .await?
            .ok_or(AppError::NotFound {
                entity: "request".to_string(),
                field: "id".to_string(),
                value: request_id.to_string(),
            })?;

        let resolved = if request.service_ids.is_empty() {
            Vec::new()
        } else {
            self.services.find_by_ids(&request.service_ids).await?
        };
        let by_id: HashMap<i32, Service> = resolved.into_iter().map(|s| (s.id, s)).collect();
        Ok(resolve_request(request, &by_id))
    }
}

/// Resolves a request's snapshot ids against current service records.
///
/// Ids that no longer resolve are dropped silently and contribute nothing
/// to the total; snapshot order is preserved for the rest.
pub fn resolve_request(request: Request, by_id: &HashMap<i32, Service>) -> RequestWithServices {
    let services: Vec<Service> = request
        .service_ids
        .iter()
        .filter_map(|id| by_id.get(id).cloned())
        .collect();
    let total = services.iter().map(pricing::total_of).sum();
    RequestWithServices {
        request,
        services,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(service_ids: Vec<i32>) -> Request {
        Request {
            id: 1,
            provider_id: 1,
            customer_name: "Jane".to_string(),
            customer_phone: "+15551234567".to_string(),
            customer_note: None,
            service_ids,
            status: RequestStatus::Pending,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    fn service(id: i32, base: f64, vat: Option<f64>, discount: Option<f64>) -> Service {
        let now = chrono::NaiveDateTime::default();
        Service {
            id,
            provider_id: 1,
            category_id: 1,
            name: format!("service-{}", id),
            base_price: base,
            vat_percent: vat,
            discount_amount: discount,
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_resolve_request_sums_totals() {
        let mut by_id = HashMap::new();
        by_id.insert(1, service(1, 50.0, Some(15.0), Some(5.0)));
        by_id.insert(2, service(2, 20.0, None, None));

        let resolved = resolve_request(request(vec![1, 2]), &by_id);

        assert_eq!(resolved.services.len(), 2);
        assert_eq!(resolved.total, 72.5);
    }

    #[test]
    fn test_deleted_service_is_dropped_but_snapshot_survives() {
        // Only service 2 still exists; the snapshot keeps both ids, the
        // resolved list and total reflect what is left.
        let mut by_id = HashMap::new();
        by_id.insert(2, service(2, 20.0, None, None));

        let resolved = resolve_request(request(vec![1, 2]), &by_id);

        assert_eq!(resolved.request.service_ids, vec![1, 2]);
        assert_eq!(resolved.services.len(), 1);
        assert_eq!(resolved.services[0].id, 2);
        assert_eq!(resolved.total, 20.0);
    }

    #[test]
    fn test_fully_unresolvable_request_totals_zero() {
        let by_id = HashMap::new();

        let resolved = resolve_request(request(vec![5, 6]), &by_id);

        assert!(resolved.services.is_empty());
        assert_eq!(resolved.total, 0.0);
    }

    #[test]
    fn test_snapshot_order_is_preserved() {
        let mut by_id = HashMap::new();
        by_id.insert(1, service(1, 10.0, None, None));
        by_id.insert(2, service(2, 20.0, None, None));
        by_id.insert(3, service(3, 30.0, None, None));

        let resolved = resolve_request(request(vec![3, 1, 2]), &by_id);

        let order: Vec<i32> = resolved.services.iter().map(|s| s.id).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }
}
