use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const AUTH_TAG: &str = "Auth";
pub const CATEGORY_TAG: &str = "Categories";
pub const SERVICE_TAG: &str = "Services";
pub const REQUEST_TAG: &str = "Requests";
pub const PUBLIC_TAG: &str = "Public";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vitrina",
        description = "Multi-tenant catalog and lead-capture API",
    ),
    modifiers(&SecurityAddon),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = AUTH_TAG, description = "Provider registration and authentication"),
        (name = CATEGORY_TAG, description = "Private category management"),
        (name = SERVICE_TAG, description = "Private service management"),
        (name = REQUEST_TAG, description = "Provider-facing customer requests"),
        (name = PUBLIC_TAG, description = "Anonymous catalog and request intake"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer Token Authentication"))
                        .build(),
                ),
            )
        }
    }
}
