use crate::{
    highlights::highlight::{Highlight, HighlightFields},
    tours::tour::TourId,
};

use super::{Database, Entity, IntegrityError};

impl Database {
    pub async fn list_highlights(&self) -> Result<Vec<Highlight>, sqlx::Error> {
        sqlx::query_as("SELECT id, highlight, tour_id FROM highlights ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn list_highlights_of_tour(
        &self,
        tour_id: TourId,
    ) -> Result<Vec<Highlight>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, highlight, tour_id FROM highlights WHERE tour_id = $1 ORDER BY id",
        )
        .bind(tour_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_highlight(&self, id: i32) -> Result<Option<Highlight>, sqlx::Error> {
        sqlx::query_as("SELECT id, highlight, tour_id FROM highlights WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create_highlight(&self, fields: &HighlightFields) -> Result<i32, IntegrityError> {
        let mut tx = self
            .begin_with_parents(&[(Entity::Tour, fields.tour_id)])
            .await?;

        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO highlights (highlight, tour_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(&fields.highlight)
        .bind(fields.tour_id)
        .fetch_one(&mut tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Replaces every field, the new tour must exist.
    pub async fn update_highlight(
        &self,
        id: i32,
        fields: &HighlightFields,
    ) -> Result<(), IntegrityError> {
        let mut tx = self
            .begin_with_parents(&[(Entity::Tour, fields.tour_id)])
            .await?;

        let rows_affected =
            sqlx::query("UPDATE highlights SET highlight = $2, tour_id = $3 WHERE id = $1")
                .bind(id)
                .bind(&fields.highlight)
                .bind(fields.tour_id)
                .execute(&mut tx)
                .await?
                .rows_affected();

        if rows_affected == 0 {
            return Err(IntegrityError::NotFound {
                entity: Entity::Highlight,
            });
        }

        tx.commit().await?;
        Ok(())
    }
}
