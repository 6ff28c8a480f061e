//! Anonymous public handlers: catalog display and request submission.
//!
//! These routes sit outside the auth middleware. Catalog assembly is
//! read-only; intake stores the submitted ids verbatim.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::PUBLIC_TAG;
use crate::api::dto::{PublicCatalogResponse, SubmitRequestRequest, SubmitRequestResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates public (unauthenticated) routes.
///
/// Routes:
/// - GET /services/{slug}  - Public catalog addressed by slug
/// - GET /{provider_id}    - Public catalog addressed by id
/// - POST /request         - Submit a customer request
pub fn public_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(catalog_by_slug))
        .routes(routes!(catalog_by_id))
        .routes(routes!(submit_request))
}

/// GET /api/public/services/{slug} - Public catalog by slug
///
/// Returns the provider summary and their active categories with services,
/// each service carrying its computed total price.
#[utoipa::path(
    get,
    path = "/services/{slug}",
    tag = PUBLIC_TAG,
    params(("slug" = String, Path, description = "Provider slug")),
    responses(
        (status = 200, description = "Public catalog", body = PublicCatalogResponse),
        (status = 404, description = "Provider not found")
    )
)]
async fn catalog_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<PublicCatalogResponse>> {
    let (provider, sections) = state.services.public_catalog.catalog_by_slug(&slug).await?;
    Ok(Json(PublicCatalogResponse::new(&provider, sections)))
}

/// GET /api/public/{provider_id} - Public catalog by provider id
#[utoipa::path(
    get,
    path = "/{provider_id}",
    tag = PUBLIC_TAG,
    params(("provider_id" = i32, Path, description = "Provider ID")),
    responses(
        (status = 200, description = "Public catalog", body = PublicCatalogResponse),
        (status = 404, description = "Provider not found")
    )
)]
async fn catalog_by_id(
    State(state): State<AppState>,
    Path(provider_id): Path<i32>,
) -> AppResult<Json<PublicCatalogResponse>> {
    let (provider, sections) = state
        .services
        .public_catalog
        .catalog_by_id(provider_id)
        .await?;
    Ok(Json(PublicCatalogResponse::new(&provider, sections)))
}

/// POST /api/public/request - Submit a customer request
///
/// Customer name and phone are required; the provider and service ids are
/// stored as given without existence checks. The created request starts
/// pending.
#[utoipa::path(
    post,
    path = "/request",
    tag = PUBLIC_TAG,
    request_body = SubmitRequestRequest,
    responses(
        (status = 200, description = "Request submitted", body = SubmitRequestResponse),
        (status = 400, description = "Missing customer name or phone")
    )
)]
async fn submit_request(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SubmitRequestRequest>,
) -> AppResult<(StatusCode, Json<SubmitRequestResponse>)> {
    let request = state
        .services
        .requests
        .submit(
            payload.provider_id,
            payload.service_ids,
            payload.customer_name,
            payload.customer_phone,
            payload.customer_note,
        )
        .await?;

    let response = SubmitRequestResponse {
        message: "Request submitted successfully!".to_string(),
        request_id: request.id,
    };
    Ok((StatusCode::OK, Json(response)))
}
