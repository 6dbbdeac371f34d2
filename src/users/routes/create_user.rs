use actix_web::{post, web::Json, HttpResponse};
use log::info;

use crate::{db::DB, error::HResult, response::CreatedResponse, users::user::NewUser};

/// Create User
///
/// Creates a profile without a password. Use the register endpoint for
/// accounts that log in with a password.
#[utoipa::path(
    request_body = NewUser,
    responses(
        (status = BAD_REQUEST, description = "Email missing"),
        (status = CONFLICT, description = "Email already taken", example = json!({"message": "already_exists", "code": 409})),
        (status = CREATED, description = "User created", body = CreatedResponse)
    ),
    tag = "users"
)]
#[post("/users")]
pub async fn create_user(db: DB, req: Json<NewUser>) -> HResult<HttpResponse> {
    req.validate()?;

    let id = db.create_user(&req).await?;
    info!("created user {}", id);

    Ok(HttpResponse::Created().json(CreatedResponse::new("User created successfully", id)))
}
