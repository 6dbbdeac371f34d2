use actix_web::{
    get,
    web::{Json, Path},
};

use crate::{
    db::DB,
    error::{HResult, IntoHandlerErrorResult},
    highlights::highlight::Highlight,
};

/// Get Highlight
#[utoipa::path(
    params(("id" = i32, Path, description = "Highlight id")),
    responses(
        (status = NOT_FOUND, description = "No such highlight"),
        (status = OK, description = "The highlight", body = Highlight)
    ),
    tag = "highlights"
)]
#[get("/highlights/{id}")]
pub async fn get_highlight(db: DB, id: Path<i32>) -> HResult<Json<Highlight>> {
    let highlight = db
        .get_highlight(id.into_inner())
        .await?
        .or_err_msg(404, "highlight_not_found")?;

    Ok(Json(highlight))
}
