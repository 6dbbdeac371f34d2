use actix_web::{
    get,
    web::{Json, Path},
};

use crate::{
    db::DB,
    error::{HResult, IntoHandlerErrorResult},
    videos::video::{Video, VideoId},
};

/// Get Video
#[utoipa::path(
    params(("id" = i32, Path, description = "Video id")),
    responses(
        (status = NOT_FOUND, description = "No such video"),
        (status = OK, description = "The video", body = Video)
    ),
    tag = "videos"
)]
#[get("/videos/{id}")]
pub async fn get_video(db: DB, id: Path<VideoId>) -> HResult<Json<Video>> {
    let video = db
        .get_video(id.into_inner())
        .await?
        .or_err_msg(404, "video_not_found")?;

    Ok(Json(video))
}
