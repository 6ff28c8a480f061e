//! Service management handlers.
//!
//! All routes here sit behind the auth middleware. Create and update
//! additionally check that the referenced category belongs to the acting
//! provider.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::SERVICE_TAG;
use crate::api::dto::{
    CreateServiceRequest, PagedResponse, ServiceListParams, ServiceResponse, UpdateServiceRequest,
};
use crate::api::middleware::AuthProvider;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedQuery};

/// Creates service-related routes.
///
/// Routes:
/// - GET /           - List own services (paged, searchable, by category)
/// - POST /          - Create service
/// - GET /{id}       - Get own service
/// - PUT /{id}       - Update service
/// - DELETE /{id}    - Delete service
pub fn service_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_services))
        .routes(routes!(create_service))
        .routes(routes!(get_service))
        .routes(routes!(update_service))
        .routes(routes!(delete_service))
}

/// GET /api/services - List the provider's services
///
/// Returns a newest-first page of the authenticated provider's services,
/// optionally filtered by name search and/or category.
#[utoipa::path(
    get,
    path = "/",
    tag = SERVICE_TAG,
    params(ServiceListParams),
    responses(
        (status = 200, description = "Paginated list of services", body = PagedResponse<ServiceResponse>)
    ),
    security(("bearerAuth" = []))
)]
async fn list_services(
    State(state): State<AppState>,
    Extension(auth_provider): Extension<AuthProvider>,
    ValidatedQuery(params): ValidatedQuery<ServiceListParams>,
) -> AppResult<Json<PagedResponse<ServiceResponse>>> {
    let window = params.window();

    let (services, total) = state
        .services
        .catalog
        .list_services(
            auth_provider.provider_id,
            params.search.as_deref(),
            params.category,
            window.offset(),
            window.limit,
        )
        .await?;

    let responses: Vec<ServiceResponse> =
        services.into_iter().map(ServiceResponse::from).collect();
    Ok(Json(PagedResponse::new(responses, window, total)))
}

/// POST /api/services - Create a service
///
/// Fails with 400 when the referenced category does not resolve to one of
/// the acting provider's categories.
#[utoipa::path(
    post,
    path = "/",
    tag = SERVICE_TAG,
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Service created", body = ServiceResponse),
        (status = 400, description = "Missing fields or invalid category")
    ),
    security(("bearerAuth" = []))
)]
async fn create_service(
    State(state): State<AppState>,
    Extension(auth_provider): Extension<AuthProvider>,
    ValidatedJson(payload): ValidatedJson<CreateServiceRequest>,
) -> AppResult<(StatusCode, Json<ServiceResponse>)> {
    let new_service = payload.into_new_service(auth_provider.provider_id);
    let service = state.services.catalog.create_service(new_service).await?;
    Ok((StatusCode::CREATED, Json(ServiceResponse::from(service))))
}

/// GET /api/services/{id} - Get one of the provider's services
#[utoipa::path(
    get,
    path = "/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service found", body = ServiceResponse),
        (status = 404, description = "Service not found"),
        (status = 403, description = "Owned by another provider")
    ),
    security(("bearerAuth" = []))
)]
async fn get_service(
    State(state): State<AppState>,
    Extension(auth_provider): Extension<AuthProvider>,
    Path(id): Path<i32>,
) -> AppResult<Json<ServiceResponse>> {
    let service = state
        .services
        .catalog
        .get_service(id, auth_provider.provider_id)
        .await?;
    Ok(Json(ServiceResponse::from(service)))
}

/// PUT /api/services/{id} - Update a service
///
/// A changed category reference is re-validated against the acting
/// provider before the write.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service ID")),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Service updated", body = ServiceResponse),
        (status = 400, description = "Invalid category"),
        (status = 404, description = "Service not found"),
        (status = 403, description = "Owned by another provider")
    ),
    security(("bearerAuth" = []))
)]
async fn update_service(
    State(state): State<AppState>,
    Extension(auth_provider): Extension<AuthProvider>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateServiceRequest>,
) -> AppResult<Json<ServiceResponse>> {
    let service = state
        .services
        .catalog
        .update_service(id, auth_provider.provider_id, payload.into_update_service())
        .await?;
    Ok(Json(ServiceResponse::from(service)))
}

/// DELETE /api/services/{id} - Delete a service
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 404, description = "Service not found"),
        (status = 403, description = "Owned by another provider")
    ),
    security(("bearerAuth" = []))
)]
async fn delete_service(
    State(state): State<AppState>,
    Extension(auth_provider): Extension<AuthProvider>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state
        .services
        .catalog
        .delete_service(id, auth_provider.provider_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
