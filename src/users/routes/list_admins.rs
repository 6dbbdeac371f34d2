use actix_web::{get, web::Json};

use crate::{
    db::DB,
    error::HResult,
    users::user::{Role, User},
};

/// List Admins
#[utoipa::path(
    responses(
        (status = OK, description = "Users with the admin role", body = [User])
    ),
    tag = "users"
)]
#[get("/users/admin")]
pub async fn list_admins(db: DB) -> HResult<Json<Vec<User>>> {
    Ok(Json(db.list_users_with_role(Role::Admin).await?))
}
