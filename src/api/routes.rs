//! Router configuration for the API.
//!
//! Centralized route registration and middleware configuration. The
//! private catalog surface sits behind the JWT auth middleware; the
//! public catalog, intake, auth, and health routes do not.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{auth_middleware, logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Routes
/// - `/api/auth` - Registration, login, token refresh (public)
/// - `/api/public` - Public catalog and request intake (public)
/// - `/api/health` - Health check (public)
/// - `/api/me` - Current provider profile (authenticated)
/// - `/api/categories`, `/api/services`, `/api/requests` - Private catalog
///   management (authenticated, ownership-scoped)
/// - `/swagger-ui` - Interactive API documentation
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first): request IDs are assigned before logging so every log line can
/// carry one.
pub fn create_router(state: AppState) -> Router {
    let private_routes = OpenApiRouter::new()
        .nest("/categories", handlers::categories::category_routes())
        .nest("/services", handlers::services::service_routes())
        .nest("/requests", handlers::requests::request_routes())
        .merge(handlers::auth::profile_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let api_routes = OpenApiRouter::new()
        .nest("/auth", handlers::auth::auth_routes())
        .nest("/public", handlers::public::public_routes())
        .merge(handlers::health::health_routes())
        .merge(private_routes);

    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", api_routes)
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // Middleware is applied in reverse order - last added runs first,
        // so logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
