use actix_web::{
    get,
    web::{Json, Path},
};

use crate::{
    db::DB,
    error::{HResult, IntoHandlerErrorResult},
    tours::tour::{Tour, TourId},
};

/// Get Tour
#[utoipa::path(
    params(("id" = i32, Path, description = "Tour id")),
    responses(
        (status = NOT_FOUND, description = "No such tour", example = json!({"message": "tour_not_found", "code": 404})),
        (status = OK, description = "The tour", body = Tour)
    ),
    tag = "tours"
)]
#[get("/tours/{id}")]
pub async fn get_tour(db: DB, id: Path<TourId>) -> HResult<Json<Tour>> {
    let tour = db
        .get_tour(id.into_inner())
        .await?
        .or_err_msg(404, "tour_not_found")?;

    Ok(Json(tour))
}
