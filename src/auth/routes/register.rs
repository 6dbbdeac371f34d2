use actix_web::{post, web::Json, HttpResponse};
use lazy_static::lazy_static;
use log::info;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    db::DB,
    error::{macros::err, HResult},
    response::CreatedResponse,
};

lazy_static! {
    pub static ref EMAIL_REGEX: regex::Regex = regex::Regex::new(r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$").unwrap();
}

#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// The email address of the user
    #[schema(example = "a@x.com")]
    email: String,
    /// The password of the user
    #[schema(example = "pw123")]
    password: String,
}

/// Register
///
/// Register a new password account using an email address and password.
/// Does not log the user in automatically, please use the login endpoint for that
#[utoipa::path(
    responses(
        (status = CONFLICT, description = "User with that email already exists", example = json!({"message": "already_exists", "code": 409})),
        (status = BAD_REQUEST, description = "Invalid or malformed details"),
        (status = CREATED, description = "Registration successful", body = CreatedResponse)
    ),
    tag = "identity"
)]
#[post("/auth/register")]
pub async fn register(db: DB, req: Json<RegisterRequest>) -> HResult<HttpResponse> {
    if !EMAIL_REGEX.is_match(&req.email) {
        return err!(400, "invalid_email");
    }

    if req.password.is_empty() {
        return err!(400, "password_required");
    }

    let id = db.register_user(&req.email, &req.password).await?;
    info!("registered password account {}", id);

    Ok(HttpResponse::Created().json(CreatedResponse::new("User registered successfully", id)))
}
