use std::fs::File;

use actix_files::NamedFile;
use actix_web::{get, web::Path};
use utoipa::ToSchema;

use crate::{
    db::DB,
    error::{HResult, IntoHandlerErrorResult},
    media::media_file_path,
    videos::video::VideoId,
};

// describes the binary body to openapi
#[derive(ToSchema)]
#[schema(example = "(binary file body)")]
struct OApiFileResponse {}

/// Download Video File
///
/// Streams the media file referenced by the video's `link`.
#[utoipa::path(
    params(("id" = i32, Path, description = "Video id")),
    responses(
        (status = OK, description = "Video file", content_type = "video/*", body = inline(OApiFileResponse)),
        (status = NOT_FOUND, description = "No such video, or its file is missing")
    ),
    tag = "videos"
)]
#[get("/videos/download/{id}")]
pub async fn download_video(db: DB, id: Path<VideoId>) -> HResult<NamedFile> {
    let video = db
        .get_video(id.into_inner())
        .await?
        .or_err_msg(404, "video_not_found")?;

    let path = media_file_path(&video.link).or_err_msg(404, "file_not_found")?;

    let file = File::open(path).or_err_msg(404, "file_not_found")?;
    NamedFile::from_file(file, &video.link).or_err_msg(404, "file_not_found")
}
