use actix_multipart::Multipart;
use actix_web::{post, web::Json};
use futures::TryStreamExt;
use log::{info, warn};
use nanoid::nanoid;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{macros::err, HResult, IntoHandlerErrorResult},
    media::{media_file_path, save_field, util::clean_filename, SaveError, MAX_FILE_SIZE},
};

#[derive(Serialize, ToSchema)]
pub struct UploadedVideoInfo {
    /// Stored file name, use it as a video's `link`
    #[schema(example = "V1StGXR8_Z5jdHi6B-myT_campus_walk.mp4")]
    name: String,
    /// Where the file can be fetched from once a video references it
    #[schema(example = "V1StGXR8_Z5jdHi6B-myT_campus_walk.mp4")]
    link: String,
}

// openapi description of the multipart body
#[derive(ToSchema)]
#[allow(dead_code)]
struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

/// Upload Video File
///
/// Stores one `video/*` part named `file` under a fresh name in the media
/// directory. The response's `name` can then be used as the `link` of a video.
#[utoipa::path(
    request_body(content = inline(UploadForm), content_type = "multipart/form-data"),
    responses(
        (status = BAD_REQUEST, description = "No video part or unusable file name", example = json!({"message": "missing_file_field", "code": 400})),
        (status = PAYLOAD_TOO_LARGE, description = "File exceeds the size limit"),
        (status = OK, description = "File stored", body = UploadedVideoInfo)
    ),
    tag = "videos"
)]
#[post("/videos/upload")]
pub async fn upload_video(mut payload: Multipart) -> HResult<Json<UploadedVideoInfo>> {
    while let Some(mut field) = payload.try_next().await.or_err_msg(400, "invalid_multipart")? {
        if field.content_disposition().get_name() != Some("file") {
            continue;
        }

        let is_video = field
            .content_type()
            .map(|ct| ct.type_() == mime::VIDEO)
            .unwrap_or(false);

        if !is_video {
            return err!(400, "not_a_video");
        }

        let original = field
            .content_disposition()
            .get_filename()
            .or_err_msg(400, "missing_filename")?
            .to_owned();

        let cleaned = clean_filename(&original).or_err_msg(400, "invalid_name")?;
        let name = nanoid!() + "_" + &cleaned;
        let path = media_file_path(&name).or_err_msg(400, "invalid_name")?;

        match save_field(&path, &mut field, MAX_FILE_SIZE).await {
            Ok(size) => info!("stored upload `{}` ({} bytes)", name, size),
            Err(SaveError::TooLarge) => return err!(413, "file_size_exceeds_limit"),
            Err(SaveError::Stream(e)) => {
                warn!("upload of `{}` aborted: {}", name, e);
                return err!(400, "upload_interrupted");
            }
            Err(SaveError::Io(e)) => {
                warn!("saving upload `{}` failed: {}", name, e);
                return err!(500, "could_not_save");
            }
        }

        return Ok(Json(UploadedVideoInfo {
            link: name.clone(),
            name,
        }));
    }

    err!(400, "missing_file_field")
}
