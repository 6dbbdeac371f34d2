use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{macros::err, HResult},
    tours::tour::TourId,
    util::is_blank,
};

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Itinerary {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Start at the SMU Administration Building")]
    pub itinerary: String,
    pub tour_id: TourId,
}

/// Used for both create and update, updates replace every field.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ItineraryFields {
    #[schema(example = "Start at the SMU Administration Building")]
    pub itinerary: String,
    /// Owning tour, must exist
    pub tour_id: TourId,
}

impl ItineraryFields {
    pub fn validate(&self) -> HResult<()> {
        if is_blank(&self.itinerary) {
            return err!(400, "itinerary_required");
        }
        Ok(())
    }
}
