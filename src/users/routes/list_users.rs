use actix_web::{get, web::Json};

use crate::{db::DB, error::HResult, users::user::User};

/// List Users
#[utoipa::path(
    responses(
        (status = OK, description = "Every user", body = [User])
    ),
    tag = "users"
)]
#[get("/users")]
pub async fn list_users(db: DB) -> HResult<Json<Vec<User>>> {
    Ok(Json(db.list_users().await?))
}
