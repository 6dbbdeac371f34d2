use actix_web::{get, web::Json};

use crate::{db::DB, error::HResult, videos::video::Video};

/// List Videos
#[utoipa::path(
    responses(
        (status = OK, description = "Every video", body = [Video])
    ),
    tag = "videos"
)]
#[get("/videos")]
pub async fn list_videos(db: DB) -> HResult<Json<Vec<Video>>> {
    Ok(Json(db.list_videos().await?))
}
