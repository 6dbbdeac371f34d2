use actix_web::{
    put,
    web::{Json, Path},
};

use crate::{
    db::DB,
    error::{macros::err, HResult},
    response::MessageResponse,
    users::user::{UserId, UserUpdate},
};

/// Update User
///
/// `name` and `email` are always required. The other profile fields keep
/// their values when omitted.
#[utoipa::path(
    params(("id" = i32, Path, description = "User id")),
    request_body = UserUpdate,
    responses(
        (status = BAD_REQUEST, description = "Name or email missing"),
        (status = NOT_FOUND, description = "No such user"),
        (status = CONFLICT, description = "Email already taken"),
        (status = OK, description = "User updated", body = MessageResponse)
    ),
    tag = "users"
)]
#[put("/users/{id}")]
pub async fn update_user(
    db: DB,
    id: Path<UserId>,
    req: Json<UserUpdate>,
) -> HResult<Json<MessageResponse>> {
    req.validate()?;

    if !db.update_user(id.into_inner(), &req).await? {
        return err!(404, "user_not_found");
    }

    Ok(Json(MessageResponse::new("User updated successfully")))
}
