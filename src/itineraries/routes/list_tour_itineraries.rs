use actix_web::{
    get,
    web::{Json, Path},
};

use crate::{db::DB, error::HResult, itineraries::itinerary::Itinerary, tours::tour::TourId};

/// List Itineraries of a Tour
#[utoipa::path(
    params(("tour_id" = i32, Path, description = "Tour id")),
    responses(
        (status = OK, description = "The tour's itinerary steps", body = [Itinerary])
    ),
    tag = "itineraries"
)]
#[get("/tours/itineraries/{tour_id}")]
pub async fn list_tour_itineraries(db: DB, tour_id: Path<TourId>) -> HResult<Json<Vec<Itinerary>>> {
    Ok(Json(db.list_itineraries_of_tour(tour_id.into_inner()).await?))
}
