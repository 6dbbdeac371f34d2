use actix_web::{
    put,
    web::{Json, Path},
};

use crate::{
    db::DB,
    error::{macros::err, HResult},
    response::MessageResponse,
    tours::tour::{TourId, TourPatch},
};

/// Update Tour
///
/// Only the supplied fields change, the rest keep their previous values.
#[utoipa::path(
    params(("id" = i32, Path, description = "Tour id")),
    request_body = TourPatch,
    responses(
        (status = BAD_REQUEST, description = "Invalid field"),
        (status = NOT_FOUND, description = "No such tour"),
        (status = OK, description = "Tour updated", body = MessageResponse)
    ),
    tag = "tours"
)]
#[put("/tours/{id}")]
pub async fn update_tour(
    db: DB,
    id: Path<TourId>,
    req: Json<TourPatch>,
) -> HResult<Json<MessageResponse>> {
    req.validate()?;

    if !db.update_tour(id.into_inner(), &req).await? {
        return err!(404, "tour_not_found");
    }

    Ok(Json(MessageResponse::new("Tour updated successfully")))
}
