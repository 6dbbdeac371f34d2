use crate::{
    tours::tour::{NewTour, Tour, TourId, TourPatch},
    users::user::UserId,
};

use super::{Database, Entity, IntegrityError};

impl Database {
    pub async fn list_tours(&self) -> Result<Vec<Tour>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM tours ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn list_tours_of_user(&self, user_id: UserId) -> Result<Vec<Tour>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM tours WHERE user_id = $1 ORDER BY id")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get_tour(&self, id: TourId) -> Result<Option<Tour>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM tours WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create_tour(&self, tour: &NewTour) -> Result<TourId, IntegrityError> {
        let mut tx = self
            .begin_with_parents(&[(Entity::User, tour.user_id)])
            .await?;

        let (id,): (TourId,) = sqlx::query_as(
            r#"
                INSERT INTO tours (name, rating, description, link, user_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id
            "#,
        )
        .bind(&tour.name)
        .bind(tour.rating)
        .bind(&tour.description)
        .bind(&tour.link)
        .bind(tour.user_id)
        .fetch_one(&mut tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Merges the patch into the stored tour. Returns false if there is no such tour.
    pub async fn update_tour(&self, id: TourId, patch: &TourPatch) -> Result<bool, sqlx::Error> {
        let rows_affected = sqlx::query(
            r#"
                UPDATE tours SET
                    name = COALESCE($2, name),
                    rating = COALESCE($3, rating),
                    description = COALESCE($4, description),
                    link = COALESCE($5, link)
                WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&patch.name)
        .bind(patch.rating)
        .bind(&patch.description)
        .bind(&patch.link)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected > 0)
    }
}
