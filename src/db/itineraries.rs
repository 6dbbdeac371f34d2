use crate::{
    itineraries::itinerary::{Itinerary, ItineraryFields},
    tours::tour::TourId,
};

use super::{Database, Entity, IntegrityError};

impl Database {
    pub async fn list_itineraries(&self) -> Result<Vec<Itinerary>, sqlx::Error> {
        sqlx::query_as("SELECT id, itinerary, tour_id FROM itineraries ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn list_itineraries_of_tour(
        &self,
        tour_id: TourId,
    ) -> Result<Vec<Itinerary>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, itinerary, tour_id FROM itineraries WHERE tour_id = $1 ORDER BY id",
        )
        .bind(tour_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_itinerary(&self, id: i32) -> Result<Option<Itinerary>, sqlx::Error> {
        sqlx::query_as("SELECT id, itinerary, tour_id FROM itineraries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create_itinerary(&self, fields: &ItineraryFields) -> Result<i32, IntegrityError> {
        let mut tx = self
            .begin_with_parents(&[(Entity::Tour, fields.tour_id)])
            .await?;

        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO itineraries (itinerary, tour_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(&fields.itinerary)
        .bind(fields.tour_id)
        .fetch_one(&mut tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Replaces every field, the new tour must exist.
    pub async fn update_itinerary(
        &self,
        id: i32,
        fields: &ItineraryFields,
    ) -> Result<(), IntegrityError> {
        let mut tx = self
            .begin_with_parents(&[(Entity::Tour, fields.tour_id)])
            .await?;

        let rows_affected =
            sqlx::query("UPDATE itineraries SET itinerary = $2, tour_id = $3 WHERE id = $1")
                .bind(id)
                .bind(&fields.itinerary)
                .bind(fields.tour_id)
                .execute(&mut tx)
                .await?
                .rows_affected();

        if rows_affected == 0 {
            return Err(IntegrityError::NotFound {
                entity: Entity::Itinerary,
            });
        }

        tx.commit().await?;
        Ok(())
    }
}
