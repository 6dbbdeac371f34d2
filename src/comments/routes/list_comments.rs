use actix_web::{
    get,
    web::{Json, Path},
};

use crate::{
    comments::comment::Comment, db::DB, error::HResult, users::user::UserId,
    videos::video::VideoId,
};

/// List Comments
#[utoipa::path(
    responses(
        (status = OK, description = "Every comment", body = [Comment])
    ),
    tag = "comments"
)]
#[get("/comments")]
pub async fn list_comments(db: DB) -> HResult<Json<Vec<Comment>>> {
    Ok(Json(db.list_comments().await?))
}

/// List Comments by a User
#[utoipa::path(
    params(("user_id" = i32, Path, description = "Author")),
    responses(
        (status = OK, description = "Comments written by the user", body = [Comment])
    ),
    tag = "comments"
)]
#[get("/comments/user/{user_id}")]
pub async fn list_user_comments(db: DB, user_id: Path<UserId>) -> HResult<Json<Vec<Comment>>> {
    Ok(Json(db.list_comments_of_user(user_id.into_inner()).await?))
}

/// List Comments on a Video
#[utoipa::path(
    params(("video_id" = i32, Path, description = "Commented video")),
    responses(
        (status = OK, description = "Comments on the video", body = [Comment])
    ),
    tag = "comments"
)]
#[get("/comments/video/{video_id}")]
pub async fn list_video_comments(
    db: DB,
    video_id: Path<VideoId>,
) -> HResult<Json<Vec<Comment>>> {
    Ok(Json(db.list_comments_of_video(video_id.into_inner()).await?))
}
