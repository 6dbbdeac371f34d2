use actix_web::{
    put,
    web::{Json, Path},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    db::{Counter, DB},
    error::HResult,
    videos::video::VideoId,
};

#[derive(Serialize, ToSchema)]
pub struct CounterResponse {
    #[schema(example = "View count incremented successfully")]
    message: String,
    /// Counter value right after this increment
    #[schema(example = 42)]
    value: i64,
}

/// Increment View Count
///
/// Adds one view. Concurrent increments are never lost.
#[utoipa::path(
    params(("id" = i32, Path, description = "Video id")),
    responses(
        (status = NOT_FOUND, description = "No such video"),
        (status = OK, description = "View counted", body = CounterResponse)
    ),
    tag = "videos"
)]
#[put("/videos/increment_view_count/{id}")]
pub async fn increment_view_count(db: DB, id: Path<VideoId>) -> HResult<Json<CounterResponse>> {
    let value = db.increment_counter(id.into_inner(), Counter::Views).await?;

    Ok(Json(CounterResponse {
        message: "View count incremented successfully".into(),
        value,
    }))
}

/// Increment Like Count
#[utoipa::path(
    params(("id" = i32, Path, description = "Video id")),
    responses(
        (status = NOT_FOUND, description = "No such video"),
        (status = OK, description = "Like counted", body = CounterResponse)
    ),
    tag = "videos"
)]
#[put("/videos/increment_like_count/{id}")]
pub async fn increment_like_count(db: DB, id: Path<VideoId>) -> HResult<Json<CounterResponse>> {
    let value = db.increment_counter(id.into_inner(), Counter::Likes).await?;

    Ok(Json(CounterResponse {
        message: "Like count incremented successfully".into(),
        value,
    }))
}
