use actix_web::{get, web::Json};

use crate::{db::DB, error::HResult, tours::tour::Tour};

/// List Tours
#[utoipa::path(
    responses(
        (status = OK, description = "Every tour", body = [Tour])
    ),
    tag = "tours"
)]
#[get("/tours")]
pub async fn list_tours(db: DB) -> HResult<Json<Vec<Tour>>> {
    Ok(Json(db.list_tours().await?))
}
