use actix_web::{
    delete,
    web::{Json, Path},
};

use crate::{
    db::{Entity, DB},
    error::HResult,
    response::MessageResponse,
};

/// Delete Itinerary
#[utoipa::path(
    params(("id" = i32, Path, description = "Itinerary id")),
    responses(
        (status = NOT_FOUND, description = "No such itinerary"),
        (status = OK, description = "Itinerary deleted", body = MessageResponse)
    ),
    tag = "itineraries"
)]
#[delete("/itineraries/{id}")]
pub async fn delete_itinerary(db: DB, id: Path<i32>) -> HResult<Json<MessageResponse>> {
    db.delete_cascade(Entity::Itinerary, id.into_inner()).await?;
    Ok(Json(MessageResponse::new("Itinerary deleted successfully")))
}
