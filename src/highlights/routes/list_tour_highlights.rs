use actix_web::{
    get,
    web::{Json, Path},
};

use crate::{db::DB, error::HResult, highlights::highlight::Highlight, tours::tour::TourId};

/// List Highlights of a Tour
#[utoipa::path(
    params(("tour_id" = i32, Path, description = "Tour id")),
    responses(
        (status = OK, description = "The tour's highlights", body = [Highlight])
    ),
    tag = "highlights"
)]
#[get("/tours/highlights/{tour_id}")]
pub async fn list_tour_highlights(db: DB, tour_id: Path<TourId>) -> HResult<Json<Vec<Highlight>>> {
    Ok(Json(db.list_highlights_of_tour(tour_id.into_inner()).await?))
}
