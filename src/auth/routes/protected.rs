use actix_web::{get, web::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{auth::user::UserEx, error::HResult, users::user::UserId};

#[derive(Serialize, ToSchema)]
pub struct ProtectedResponse {
    message: String,
    user_id: UserId,
}

/// Protected
///
/// Only answers requests carrying a live `Session` cookie together with the
/// same token in the `X-Session-Token` header.
#[utoipa::path(
    responses(
        (status = UNAUTHORIZED, description = "Missing or mismatched session", example = json!({"message": "access_denied", "code": 401})),
        (status = OK, description = "Session is valid", body = ProtectedResponse)
    ),
    tag = "identity",
    security(("session" = []))
)]
#[get("/auth/protected")]
pub async fn protected(user: UserEx) -> HResult<Json<ProtectedResponse>> {
    Ok(Json(ProtectedResponse {
        message: "Access granted".into(),
        user_id: user.id,
    }))
}
