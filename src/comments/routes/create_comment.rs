use actix_web::{post, web::Json, HttpResponse};
use log::info;

use crate::{
    comments::comment::NewComment, db::DB, error::HResult, response::CreatedResponse,
};

/// Create Comment
///
/// Both the video and the author must exist, nothing is stored otherwise.
#[utoipa::path(
    request_body = NewComment,
    responses(
        (status = BAD_REQUEST, description = "Blank description"),
        (status = NOT_FOUND, description = "Video or author does not exist", example = json!({"message": "video_not_found", "code": 404})),
        (status = CREATED, description = "Comment created", body = CreatedResponse)
    ),
    tag = "comments"
)]
#[post("/comments")]
pub async fn create_comment(db: DB, req: Json<NewComment>) -> HResult<HttpResponse> {
    req.validate()?;

    let id = db.create_comment(&req).await?;
    info!("user {} commented on video {}", req.user_id, req.video_id);

    Ok(HttpResponse::Created().json(CreatedResponse::new("Comment created successfully", id)))
}
