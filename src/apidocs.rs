use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    OpenApi,
};

use crate::{
    auth::routes::AuthApiDocs, comments::routes::CommentsApiDocs,
    highlights::routes::HighlightsApiDocs, itineraries::routes::ItinerariesApiDocs,
    sso::routes::SsoApiDocs, tours::routes::ToursApiDocs, users::routes::UsersApiDocs,
    videos::routes::VideosApiDocs,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Tours API"),
    modifiers(&SessionSecurityAddon),
    components(schemas(
        crate::error::HandlerError,
        crate::response::CreatedResponse,
        crate::response::MessageResponse,
    ))
)]
pub struct ApiDocs;

pub fn setup_oapi() -> utoipa::openapi::OpenApi {
    let mut oapi = ApiDocs::openapi();

    oapi.merge(AuthApiDocs::openapi());
    oapi.merge(SsoApiDocs::openapi());
    oapi.merge(UsersApiDocs::openapi());
    oapi.merge(ToursApiDocs::openapi());
    oapi.merge(ItinerariesApiDocs::openapi());
    oapi.merge(HighlightsApiDocs::openapi());
    oapi.merge(VideosApiDocs::openapi());
    oapi.merge(CommentsApiDocs::openapi());

    oapi
}

struct SessionSecurityAddon;

impl utoipa::Modify for SessionSecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            // guarded routes need the token twice, as cookie and as header
            components.add_security_scheme(
                "session",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "X-Session-Token",
                    "Session token from /auth/login, must equal the `Session` cookie",
                ))),
            );
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("Session"))),
            );
        }
    }
}
