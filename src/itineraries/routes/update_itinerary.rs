use actix_web::{
    put,
    web::{Json, Path},
};

use crate::{
    db::DB, error::HResult, itineraries::itinerary::ItineraryFields, response::MessageResponse,
};

/// Update Itinerary
///
/// Every field must be supplied. Moving a step to another tour requires that
/// tour to exist.
#[utoipa::path(
    params(("id" = i32, Path, description = "Itinerary id")),
    request_body = ItineraryFields,
    responses(
        (status = BAD_REQUEST, description = "Missing or blank field"),
        (status = NOT_FOUND, description = "No such itinerary or tour"),
        (status = OK, description = "Itinerary updated", body = MessageResponse)
    ),
    tag = "itineraries"
)]
#[put("/itineraries/{id}")]
pub async fn update_itinerary(
    db: DB,
    id: Path<i32>,
    req: Json<ItineraryFields>,
) -> HResult<Json<MessageResponse>> {
    req.validate()?;

    db.update_itinerary(id.into_inner(), &req).await?;
    Ok(Json(MessageResponse::new("Itinerary updated successfully")))
}
