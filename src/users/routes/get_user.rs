use actix_web::{
    get,
    web::{Json, Path},
};

use crate::{
    db::DB,
    error::{HResult, IntoHandlerErrorResult},
    users::user::{User, UserId},
};

/// Get User
#[utoipa::path(
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = NOT_FOUND, description = "No such user"),
        (status = OK, description = "The user", body = User)
    ),
    tag = "users"
)]
#[get("/users/{id}")]
pub async fn get_user(db: DB, id: Path<UserId>) -> HResult<Json<User>> {
    let user = db
        .get_user_by_id(id.into_inner())
        .await?
        .or_err_msg(404, "user_not_found")?;

    Ok(Json(user))
}
