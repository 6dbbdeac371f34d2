use actix_web::{
    delete,
    web::{Json, Path},
};

use crate::{
    db::{Entity, DB},
    error::HResult,
    response::MessageResponse,
};

/// Delete Highlight
#[utoipa::path(
    params(("id" = i32, Path, description = "Highlight id")),
    responses(
        (status = NOT_FOUND, description = "No such highlight"),
        (status = OK, description = "Highlight deleted", body = MessageResponse)
    ),
    tag = "highlights"
)]
#[delete("/highlights/{id}")]
pub async fn delete_highlight(db: DB, id: Path<i32>) -> HResult<Json<MessageResponse>> {
    db.delete_cascade(Entity::Highlight, id.into_inner()).await?;
    Ok(Json(MessageResponse::new("Highlight deleted successfully")))
}
