//! Provider-facing request handlers: listing with totals and status
//! transitions.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::REQUEST_TAG;
use crate::api::dto::{RequestResponse, UpdateRequestStatusRequest};
use crate::api::middleware::AuthProvider;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates request-related routes.
///
/// Routes:
/// - GET /        - List own requests with resolved services and totals
/// - PUT /{id}    - Transition a request's status
pub fn request_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_requests))
        .routes(routes!(update_request_status))
}

/// GET /api/requests - List the provider's requests
///
/// Returns all requests newest-first, each joined with the snapshot
/// services that still resolve and the computed total.
#[utoipa::path(
    get,
    path = "/",
    tag = REQUEST_TAG,
    responses(
        (status = 200, description = "List of requests with totals", body = Vec<RequestResponse>)
    ),
    security(("bearerAuth" = []))
)]
async fn list_requests(
    State(state): State<AppState>,
    Extension(auth_provider): Extension<AuthProvider>,
) -> AppResult<Json<Vec<RequestResponse>>> {
    let entries = state
        .services
        .requests
        .list_with_totals(auth_provider.provider_id)
        .await?;

    let responses: Vec<RequestResponse> =
        entries.into_iter().map(RequestResponse::from).collect();
    Ok(Json(responses))
}

/// PUT /api/requests/{id} - Transition a request's status
///
/// The request must belong to the acting provider; a foreign id behaves
/// like a missing one. The status is overwritten as given.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = REQUEST_TAG,
    params(("id" = i32, Path, description = "Request ID")),
    request_body = UpdateRequestStatusRequest,
    responses(
        (status = 200, description = "Request updated", body = RequestResponse),
        (status = 404, description = "Request not found for this provider")
    ),
    security(("bearerAuth" = []))
)]
async fn update_request_status(
    State(state): State<AppState>,
    Extension(auth_provider): Extension<AuthProvider>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateRequestStatusRequest>,
) -> AppResult<Json<RequestResponse>> {
    let entry = state
        .services
        .requests
        .update_status(id, auth_provider.provider_id, payload.status)
        .await?;

    Ok(Json(RequestResponse::from(entry)))
}
