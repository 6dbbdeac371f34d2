use actix_web::{
    delete,
    web::{Json, Path},
};

use crate::{
    db::{Entity, DB},
    error::HResult,
    response::MessageResponse,
};

/// Delete Comment
#[utoipa::path(
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = NOT_FOUND, description = "No such comment"),
        (status = OK, description = "Comment deleted", body = MessageResponse)
    ),
    tag = "comments"
)]
#[delete("/comments/{id}")]
pub async fn delete_comment(db: DB, id: Path<i32>) -> HResult<Json<MessageResponse>> {
    db.delete_cascade(Entity::Comment, id.into_inner()).await?;
    Ok(Json(MessageResponse::new("Comment deleted successfully")))
}
