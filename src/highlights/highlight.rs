use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{macros::err, HResult},
    tours::tour::TourId,
    util::is_blank,
};

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Highlight {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Prime city center location.")]
    pub highlight: String,
    pub tour_id: TourId,
}

/// Used for both create and update, updates replace every field.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct HighlightFields {
    #[schema(example = "Prime city center location.")]
    pub highlight: String,
    pub tour_id: TourId,
}

impl HighlightFields {
    pub fn validate(&self) -> HResult<()> {
        if is_blank(&self.highlight) {
            return err!(400, "highlight_required");
        }
        Ok(())
    }
}
