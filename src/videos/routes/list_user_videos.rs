use actix_web::{
    get,
    web::{Json, Path},
};

use crate::{db::DB, error::HResult, users::user::UserId, videos::video::Video};

/// List Videos of a User
#[utoipa::path(
    params(("user_id" = i32, Path, description = "Owner of the videos")),
    responses(
        (status = OK, description = "Videos owned by the user", body = [Video])
    ),
    tag = "videos"
)]
#[get("/videos/user/{user_id}")]
pub async fn list_user_videos(db: DB, user_id: Path<UserId>) -> HResult<Json<Vec<Video>>> {
    Ok(Json(db.list_videos_of_user(user_id.into_inner()).await?))
}
