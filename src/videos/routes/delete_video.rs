use actix_web::{
    delete,
    web::{Json, Path},
};

use crate::{
    db::{Entity, DB},
    error::HResult,
    response::MessageResponse,
    videos::video::VideoId,
};

/// Delete Video
///
/// Also deletes every comment on the video. The media file stays on disk.
#[utoipa::path(
    params(("id" = i32, Path, description = "Video id")),
    responses(
        (status = NOT_FOUND, description = "No such video"),
        (status = OK, description = "Video deleted", body = MessageResponse)
    ),
    tag = "videos"
)]
#[delete("/videos/{id}")]
pub async fn delete_video(db: DB, id: Path<VideoId>) -> HResult<Json<MessageResponse>> {
    db.delete_cascade(Entity::Video, id.into_inner()).await?;
    Ok(Json(MessageResponse::new("Video deleted successfully")))
}
