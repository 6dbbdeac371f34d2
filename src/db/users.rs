use actix_web::web;
use log::error;

use crate::{
    crypto,
    error::{HResult, HandlerError},
    users::user::{AuthMethod, Credentials, NewUser, Role, User, UserId, UserUpdate},
};

use super::Database;

const USER_COLUMNS: &str =
    "id, email, role, auth_method, name, link, language_spoken, self_intro, created_at";

impl Database {
    pub async fn list_users(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as(&format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS))
            .fetch_all(&self.pool)
            .await
    }

    pub async fn list_users_with_role(&self, role: Role) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE role = $1 ORDER BY id",
            USER_COLUMNS
        ))
        .bind(role)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_user_by_id(&self, id: UserId) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_credentials(&self, email: &str) -> Result<Option<Credentials>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, email, role, password_hash FROM users WHERE lower(email) = lower($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    /// Creates a profile without a password, such accounts sign in through sso.
    pub async fn create_user(&self, user: &NewUser) -> Result<UserId, sqlx::Error> {
        let (id,): (UserId,) = sqlx::query_as(
            r#"
                INSERT INTO users (email, role, auth_method, name, link, language_spoken, self_intro)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id
            "#,
        )
        .bind(&user.email)
        .bind(user.role.unwrap_or_default())
        .bind(AuthMethod::Sso)
        .bind(&user.name)
        .bind(&user.link)
        .bind(&user.language_spoken)
        .bind(&user.self_intro)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Creates a password account. Only the salted hash is stored.
    /// A taken email surfaces as a 409.
    pub async fn register_user(&self, email: &str, password: &str) -> HResult<UserId> {
        let password = password.to_owned();
        let hash = web::block(move || crypto::hash(&password))
            .await
            .map_err(|e| {
                error!("password hashing did not complete: {}", e);
                HandlerError::internal_error()
            })?
            .map_err(|e| {
                error!("password hashing failed: {}", e);
                HandlerError::internal_error()
            })?;

        let (id,): (UserId,) = sqlx::query_as(
            r#"
                INSERT INTO users (email, password_hash, auth_method, role)
                VALUES ($1, $2, $3, $4)
                RETURNING id
            "#,
        )
        .bind(email)
        .bind(hash)
        .bind(AuthMethod::Password)
        .bind(Role::Regular)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Returns false if the user does not exist.
    pub async fn update_user(&self, id: UserId, update: &UserUpdate) -> Result<bool, sqlx::Error> {
        let rows_affected = sqlx::query(
            r#"
                UPDATE users SET
                    name = $2,
                    email = $3,
                    link = COALESCE($4, link),
                    language_spoken = COALESCE($5, language_spoken),
                    self_intro = COALESCE($6, self_intro)
                WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.email)
        .bind(&update.link)
        .bind(&update.language_spoken)
        .bind(&update.self_intro)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected > 0)
    }
}
