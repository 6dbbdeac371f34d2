use actix_web::{
    delete,
    web::{Json, Path},
};

use crate::{
    db::{Entity, DB},
    error::HResult,
    response::MessageResponse,
    users::user::UserId,
};

/// Delete User
///
/// Also deletes everything the user owns: tours with their itineraries and
/// highlights, videos with their comments, and the user's own comments.
#[utoipa::path(
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = NOT_FOUND, description = "No such user"),
        (status = OK, description = "User deleted", body = MessageResponse)
    ),
    tag = "users"
)]
#[delete("/users/{id}")]
pub async fn delete_user(db: DB, id: Path<UserId>) -> HResult<Json<MessageResponse>> {
    db.delete_cascade(Entity::User, id.into_inner()).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
