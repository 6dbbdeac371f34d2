use actix_web::{get, web::Json};

use crate::{db::DB, error::HResult, itineraries::itinerary::Itinerary};

/// List Itineraries
#[utoipa::path(
    responses(
        (status = OK, description = "Every itinerary step", body = [Itinerary])
    ),
    tag = "itineraries"
)]
#[get("/itineraries")]
pub async fn list_itineraries(db: DB) -> HResult<Json<Vec<Itinerary>>> {
    Ok(Json(db.list_itineraries().await?))
}
