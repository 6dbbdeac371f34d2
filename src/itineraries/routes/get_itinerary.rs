use actix_web::{
    get,
    web::{Json, Path},
};

use crate::{
    db::DB,
    error::{HResult, IntoHandlerErrorResult},
    itineraries::itinerary::Itinerary,
};

/// Get Itinerary
#[utoipa::path(
    params(("id" = i32, Path, description = "Itinerary id")),
    responses(
        (status = NOT_FOUND, description = "No such itinerary"),
        (status = OK, description = "The itinerary step", body = Itinerary)
    ),
    tag = "itineraries"
)]
#[get("/itineraries/{id}")]
pub async fn get_itinerary(db: DB, id: Path<i32>) -> HResult<Json<Itinerary>> {
    let itinerary = db
        .get_itinerary(id.into_inner())
        .await?
        .or_err_msg(404, "itinerary_not_found")?;

    Ok(Json(itinerary))
}
