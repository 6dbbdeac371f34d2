use actix_web::{post, web::Json, HttpResponse};
use log::info;

use crate::{db::DB, error::HResult, response::CreatedResponse, tours::tour::NewTour};

/// Create Tour
///
/// The owning user must exist.
#[utoipa::path(
    request_body = NewTour,
    responses(
        (status = BAD_REQUEST, description = "Missing or invalid field"),
        (status = NOT_FOUND, description = "Owner does not exist", example = json!({"message": "user_not_found", "code": 404})),
        (status = CREATED, description = "Tour created", body = CreatedResponse)
    ),
    tag = "tours"
)]
#[post("/tours")]
pub async fn create_tour(db: DB, req: Json<NewTour>) -> HResult<HttpResponse> {
    req.validate()?;

    let id = db.create_tour(&req).await?;
    info!("user {} created tour {}", req.user_id, id);

    Ok(HttpResponse::Created().json(CreatedResponse::new("Tour created successfully", id)))
}
