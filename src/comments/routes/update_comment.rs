use actix_web::{
    put,
    web::{Json, Path},
};

use crate::{
    comments::comment::CommentUpdate,
    db::DB,
    error::{macros::err, HResult},
    response::MessageResponse,
};

/// Update Comment
#[utoipa::path(
    params(("id" = i32, Path, description = "Comment id")),
    request_body = CommentUpdate,
    responses(
        (status = BAD_REQUEST, description = "Blank description"),
        (status = NOT_FOUND, description = "No such comment"),
        (status = OK, description = "Comment updated", body = MessageResponse)
    ),
    tag = "comments"
)]
#[put("/comments/{id}")]
pub async fn update_comment(
    db: DB,
    id: Path<i32>,
    req: Json<CommentUpdate>,
) -> HResult<Json<MessageResponse>> {
    req.validate()?;

    if !db.update_comment(id.into_inner(), &req).await? {
        return err!(404, "comment_not_found");
    }

    Ok(Json(MessageResponse::new("Comment updated successfully")))
}
