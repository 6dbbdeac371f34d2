use utoipa::OpenApi;

pub mod login;
pub mod logout;
pub mod protected;
pub mod register;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(login::login)
        .service(logout::logout)
        .service(register::register)
        .service(protected::protected);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "identity")
    ),
    paths(
        register::register,
        login::login,
        logout::logout,
        protected::protected
    ),
    components(schemas(
        register::RegisterRequest,
        login::LoginRequest,
        login::LoginResponse,
        protected::ProtectedResponse,
        crate::auth::user::SessionUser,
    ))
)]
pub struct AuthApiDocs;
