use actix_web::{post, web::Json, HttpResponse};
use log::info;

use crate::{
    db::DB, error::HResult, highlights::highlight::HighlightFields, response::CreatedResponse,
};

/// Create Highlight
///
/// The tour must exist.
#[utoipa::path(
    request_body = HighlightFields,
    responses(
        (status = BAD_REQUEST, description = "Missing or blank field"),
        (status = NOT_FOUND, description = "Tour does not exist", example = json!({"message": "tour_not_found", "code": 404})),
        (status = CREATED, description = "Highlight created", body = CreatedResponse)
    ),
    tag = "highlights"
)]
#[post("/highlights")]
pub async fn create_highlight(db: DB, req: Json<HighlightFields>) -> HResult<HttpResponse> {
    req.validate()?;

    let id = db.create_highlight(&req).await?;
    info!("created highlight {} on tour {}", id, req.tour_id);

    Ok(HttpResponse::Created().json(CreatedResponse::new("Highlight created successfully", id)))
}
