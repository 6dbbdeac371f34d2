use actix_web::{
    put,
    web::{Json, Path},
};

use crate::{
    db::DB,
    error::{macros::err, HResult},
    response::MessageResponse,
    videos::video::{VideoId, VideoUpdate},
};

/// Update Video
///
/// `name` is always required, the other fields keep their values when
/// omitted. View and like counters can not be set here, use the increment
/// endpoints.
#[utoipa::path(
    params(("id" = i32, Path, description = "Video id")),
    request_body = VideoUpdate,
    responses(
        (status = BAD_REQUEST, description = "Missing or blank field"),
        (status = NOT_FOUND, description = "No such video"),
        (status = OK, description = "Video updated", body = MessageResponse)
    ),
    tag = "videos"
)]
#[put("/videos/{id}")]
pub async fn update_video(
    db: DB,
    id: Path<VideoId>,
    req: Json<VideoUpdate>,
) -> HResult<Json<MessageResponse>> {
    req.validate()?;

    if !db.update_video(id.into_inner(), &req).await? {
        return err!(404, "video_not_found");
    }

    Ok(Json(MessageResponse::new("Video updated successfully")))
}
