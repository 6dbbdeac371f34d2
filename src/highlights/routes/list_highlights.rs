use actix_web::{get, web::Json};

use crate::{db::DB, error::HResult, highlights::highlight::Highlight};

/// List Highlights
#[utoipa::path(
    responses(
        (status = OK, description = "Every highlight", body = [Highlight])
    ),
    tag = "highlights"
)]
#[get("/highlights")]
pub async fn list_highlights(db: DB) -> HResult<Json<Vec<Highlight>>> {
    Ok(Json(db.list_highlights().await?))
}
