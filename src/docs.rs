use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::handler::health,
        crate::modules::talking_head::handler::generate_talking_head,
    ),
    components(
        schemas(
            crate::common::response::ApiMessage,
            crate::modules::health::dto::HealthResponse,
            crate::modules::talking_head::dto::TalkingHeadForm,
        )
    ),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "TalkingHead", description = "Talking-head video generation")
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("Token")
                        .build(),
                ),
            );
        }
    }
}
