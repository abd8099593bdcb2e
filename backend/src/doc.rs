//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer, the
//! request/response schemas, and the bearer scheme describing tokens issued
//! by the login endpoints. The document backs Swagger UI in debug builds and
//! is exported by `cargo run --bin openapi-dump`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::applications::{ApplicationRequest, ApplicationResponse};
use crate::inbound::http::auth::{CredentialsRequest, LoginResponse, MessageResponse};
use crate::inbound::http::error::ErrorBody;

/// Register the JWT bearer scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some(
                        "HS256 token returned by POST /api/auth/login/{sme,investor}.",
                    ))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "SME funding backend API",
        description = "Account signup/login for SMEs and investors, and funding application intake."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::signup_sme,
        crate::inbound::http::auth::signup_investor,
        crate::inbound::http::auth::login_sme,
        crate::inbound::http::auth::login_investor,
        crate::inbound::http::applications::submit_application,
        crate::inbound::http::applications::list_applications,
        crate::inbound::http::applications::get_application,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CredentialsRequest,
        MessageResponse,
        LoginResponse,
        ApplicationRequest,
        ApplicationResponse,
        ErrorBody
    )),
    tags(
        (name = "auth", description = "Account signup and token exchange"),
        (name = "applications", description = "Funding application intake"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
