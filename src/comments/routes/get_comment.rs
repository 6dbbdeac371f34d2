use actix_web::{
    get,
    web::{Json, Path},
};

use crate::{
    comments::comment::Comment,
    db::DB,
    error::{HResult, IntoHandlerErrorResult},
};

/// Get Comment
#[utoipa::path(
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = NOT_FOUND, description = "No such comment"),
        (status = OK, description = "The comment", body = Comment)
    ),
    tag = "comments"
)]
#[get("/comments/{id}")]
pub async fn get_comment(db: DB, id: Path<i32>) -> HResult<Json<Comment>> {
    db.get_comment(id.into_inner())
        .await?
        .or_err_msg(404, "comment_not_found")
        .map(Json)
}
