//! REST API layer: system and presence endpoints plus router composition.

pub mod presence;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// OpenAPI document for the REST surface.
#[cfg(feature = "swagger-ui")]
#[derive(utoipa::OpenApi)]
#[openapi(paths(system::health_handler, presence::presence_handler))]
struct ApiDoc;

/// Builds the complete REST router.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .merge(system::routes())
        .nest("/api/v1", presence::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
    };

    router
}
