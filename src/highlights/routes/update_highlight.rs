use actix_web::{
    put,
    web::{Json, Path},
};

use crate::{
    db::DB, error::HResult, highlights::highlight::HighlightFields, response::MessageResponse,
};

/// Update Highlight
///
/// Every field must be supplied. Moving a highlight to another tour requires that
/// tour to exist.
#[utoipa::path(
    params(("id" = i32, Path, description = "Highlight id")),
    request_body = HighlightFields,
    responses(
        (status = BAD_REQUEST, description = "Missing or blank field"),
        (status = NOT_FOUND, description = "No such highlight or tour"),
        (status = OK, description = "Highlight updated", body = MessageResponse)
    ),
    tag = "highlights"
)]
#[put("/highlights/{id}")]
pub async fn update_highlight(
    db: DB,
    id: Path<i32>,
    req: Json<HighlightFields>,
) -> HResult<Json<MessageResponse>> {
    req.validate()?;

    db.update_highlight(id.into_inner(), &req).await?;
    Ok(Json(MessageResponse::new("Highlight updated successfully")))
}
