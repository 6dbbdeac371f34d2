// Re-export internals for use under the tours_server crate namespace
// Mainly for use in tests
pub mod apidocs;
pub mod auth;
pub mod comments;
pub mod crypto;
pub mod db;
pub mod error;
pub mod highlights;
pub mod itineraries;
pub mod media;
pub mod options;
pub mod response;
pub mod sso;
pub mod tours;
pub mod users;
pub mod util;
pub mod videos;

/// Registers every route of the api along with the extractor configs that
/// turn malformed requests into json errors.
///
/// Shared state (`DB`, `SessionManager`, `SsoManager`) must be added by the
/// caller.
pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .app_data(error::path_config())
        .app_data(error::query_config());

    // /users/admin has to be registered before /users/{id}
    users::routes::configure_app(cfg);
    auth::routes::configure_app(cfg);
    sso::routes::configure_app(cfg);
    tours::routes::configure_app(cfg);
    itineraries::routes::configure_app(cfg);
    highlights::routes::configure_app(cfg);
    videos::routes::configure_app(cfg);
    comments::routes::configure_app(cfg);
}
