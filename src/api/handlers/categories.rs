//! Category management handlers.
//!
//! All routes here sit behind the auth middleware; every operation is
//! scoped to the authenticated provider and mutations are
//! ownership-checked in the service layer.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::CATEGORY_TAG;
use crate::api::dto::{
    CategoryListParams, CategoryResponse, CreateCategoryRequest, PagedResponse,
    UpdateCategoryRequest,
};
use crate::api::middleware::AuthProvider;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedQuery};

/// Creates category-related routes.
///
/// Routes:
/// - GET /           - List own categories (paged, searchable)
/// - POST /          - Create category
/// - GET /{id}       - Get own category
/// - PUT /{id}       - Update category
/// - DELETE /{id}    - Delete category
pub fn category_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_categories))
        .routes(routes!(create_category))
        .routes(routes!(get_category))
        .routes(routes!(update_category))
        .routes(routes!(delete_category))
}

/// GET /api/categories - List the provider's categories
///
/// Returns a newest-first page of the authenticated provider's categories,
/// optionally filtered by a case-insensitive title search.
#[utoipa::path(
    get,
    path = "/",
    tag = CATEGORY_TAG,
    params(CategoryListParams),
    responses(
        (status = 200, description = "Paginated list of categories", body = PagedResponse<CategoryResponse>)
    ),
    security(("bearerAuth" = []))
)]
async fn list_categories(
    State(state): State<AppState>,
    Extension(auth_provider): Extension<AuthProvider>,
    ValidatedQuery(params): ValidatedQuery<CategoryListParams>,
) -> AppResult<Json<PagedResponse<CategoryResponse>>> {
    let window = params.window();

    let (categories, total) = state
        .services
        .catalog
        .list_categories(
            auth_provider.provider_id,
            params.search.as_deref(),
            window.offset(),
            window.limit,
        )
        .await?;

    let responses: Vec<CategoryResponse> =
        categories.into_iter().map(CategoryResponse::from).collect();
    Ok(Json(PagedResponse::new(responses, window, total)))
}

/// POST /api/categories - Create a category
#[utoipa::path(
    post,
    path = "/",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Title missing")
    ),
    security(("bearerAuth" = []))
)]
async fn create_category(
    State(state): State<AppState>,
    Extension(auth_provider): Extension<AuthProvider>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    let new_category = payload.into_new_category(auth_provider.provider_id);
    let category = state.services.catalog.create_category(new_category).await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

/// GET /api/categories/{id} - Get one of the provider's categories
#[utoipa::path(
    get,
    path = "/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found"),
        (status = 403, description = "Owned by another provider")
    ),
    security(("bearerAuth" = []))
)]
async fn get_category(
    State(state): State<AppState>,
    Extension(auth_provider): Extension<AuthProvider>,
    Path(id): Path<i32>,
) -> AppResult<Json<CategoryResponse>> {
    let category = state
        .services
        .catalog
        .get_category(id, auth_provider.provider_id)
        .await?;
    Ok(Json(CategoryResponse::from(category)))
}

/// PUT /api/categories/{id} - Update a category
#[utoipa::path(
    put,
    path = "/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 404, description = "Category not found"),
        (status = 403, description = "Owned by another provider")
    ),
    security(("bearerAuth" = []))
)]
async fn update_category(
    State(state): State<AppState>,
    Extension(auth_provider): Extension<AuthProvider>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateCategoryRequest>,
) -> AppResult<Json<CategoryResponse>> {
    let category = state
        .services
        .catalog
        .update_category(id, auth_provider.provider_id, payload.into_update_category())
        .await?;
    Ok(Json(CategoryResponse::from(category)))
}

/// DELETE /api/categories/{id} - Delete a category
///
/// Hard delete; services under the category keep their dangling reference.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found"),
        (status = 403, description = "Owned by another provider")
    ),
    security(("bearerAuth" = []))
)]
async fn delete_category(
    State(state): State<AppState>,
    Extension(auth_provider): Extension<AuthProvider>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state
        .services
        .catalog
        .delete_category(id, auth_provider.provider_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
