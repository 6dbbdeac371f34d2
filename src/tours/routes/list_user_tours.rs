use actix_web::{
    get,
    web::{Json, Path},
};

use crate::{db::DB, error::HResult, tours::tour::Tour, users::user::UserId};

/// List Tours of a User
///
/// An unknown user simply owns no tours.
#[utoipa::path(
    params(("user_id" = i32, Path, description = "Owner of the tours")),
    responses(
        (status = OK, description = "Tours owned by the user", body = [Tour])
    ),
    tag = "tours"
)]
#[get("/tours/user/{user_id}")]
pub async fn list_user_tours(db: DB, user_id: Path<UserId>) -> HResult<Json<Vec<Tour>>> {
    Ok(Json(db.list_tours_of_user(user_id.into_inner()).await?))
}
