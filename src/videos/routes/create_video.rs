use actix_web::{post, web::Json, HttpResponse};
use log::info;

use crate::{db::DB, error::HResult, response::CreatedResponse, videos::video::NewVideo};

/// Create Video
///
/// The owning user must exist. Counters start at the supplied values, or zero.
#[utoipa::path(
    request_body = NewVideo,
    responses(
        (status = BAD_REQUEST, description = "Missing or invalid field"),
        (status = NOT_FOUND, description = "Owner does not exist", example = json!({"message": "user_not_found", "code": 404})),
        (status = CREATED, description = "Video created", body = CreatedResponse)
    ),
    tag = "videos"
)]
#[post("/videos")]
pub async fn create_video(db: DB, req: Json<NewVideo>) -> HResult<HttpResponse> {
    req.validate()?;

    let id = db.create_video(&req).await?;
    info!("user {} created video {}", req.user_id, id);

    Ok(HttpResponse::Created().json(CreatedResponse::new("Video created successfully", id)))
}
