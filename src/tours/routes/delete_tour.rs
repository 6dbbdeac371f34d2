use actix_web::{
    delete,
    web::{Json, Path},
};

use crate::{
    db::{Entity, DB},
    error::HResult,
    response::MessageResponse,
    tours::tour::TourId,
};

/// Delete Tour
///
/// Also deletes the tour's itineraries and highlights.
#[utoipa::path(
    params(("id" = i32, Path, description = "Tour id")),
    responses(
        (status = NOT_FOUND, description = "No such tour"),
        (status = OK, description = "Tour deleted", body = MessageResponse)
    ),
    tag = "tours"
)]
#[delete("/tours/{id}")]
pub async fn delete_tour(db: DB, id: Path<TourId>) -> HResult<Json<MessageResponse>> {
    db.delete_cascade(Entity::Tour, id.into_inner()).await?;
    Ok(Json(MessageResponse::new("Tour deleted successfully")))
}
