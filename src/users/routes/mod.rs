use utoipa::OpenApi;

pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_admins;
pub mod list_users;
pub mod update_user;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    // `/users/admin` must be registered before `/users/{id}` or it would be
    // routed there and rejected as a malformed id
    cfg.service(list_admins::list_admins)
        .service(list_users::list_users)
        .service(get_user::get_user)
        .service(create_user::create_user)
        .service(update_user::update_user)
        .service(delete_user::delete_user);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "users")
    ),
    paths(
        list_users::list_users,
        list_admins::list_admins,
        get_user::get_user,
        create_user::create_user,
        update_user::update_user,
        delete_user::delete_user
    ),
    components(schemas(
        crate::users::user::User,
        crate::users::user::Role,
        crate::users::user::AuthMethod,
        crate::users::user::NewUser,
        crate::users::user::UserUpdate,
    ))
)]
pub struct UsersApiDocs;
