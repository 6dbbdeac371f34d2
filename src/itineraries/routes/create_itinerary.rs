use actix_web::{post, web::Json, HttpResponse};
use log::info;

use crate::{
    db::DB, error::HResult, itineraries::itinerary::ItineraryFields, response::CreatedResponse,
};

/// Create Itinerary
///
/// The tour must exist.
#[utoipa::path(
    request_body = ItineraryFields,
    responses(
        (status = BAD_REQUEST, description = "Missing or blank field"),
        (status = NOT_FOUND, description = "Tour does not exist", example = json!({"message": "tour_not_found", "code": 404})),
        (status = CREATED, description = "Itinerary created", body = CreatedResponse)
    ),
    tag = "itineraries"
)]
#[post("/itineraries")]
pub async fn create_itinerary(db: DB, req: Json<ItineraryFields>) -> HResult<HttpResponse> {
    req.validate()?;

    let id = db.create_itinerary(&req).await?;
    info!("created itinerary {} on tour {}", id, req.tour_id);

    Ok(HttpResponse::Created().json(CreatedResponse::new("Itinerary created successfully", id)))
}
