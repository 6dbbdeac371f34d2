use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{macros::err, HResult},
    users::user::UserId,
    util::is_blank,
};

pub type TourId = i32;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Tour {
    #[schema(example = 1)]
    pub id: TourId,
    #[schema(example = "SMU Tour")]
    pub name: String,
    #[schema(example = 4.9)]
    pub rating: f64,
    pub description: String,
    /// Cover image
    #[schema(example = "picture/smu/01")]
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewTour {
    #[schema(example = "SMU Tour")]
    pub name: String,
    #[schema(example = 4.9)]
    pub rating: f64,
    pub description: String,
    #[schema(example = "picture/smu/01")]
    pub link: String,
    /// Owner, must exist
    pub user_id: UserId,
}

impl NewTour {
    pub fn validate(&self) -> HResult<()> {
        if is_blank(&self.name) {
            return err!(400, "name_required");
        }
        if is_blank(&self.description) {
            return err!(400, "description_required");
        }
        if is_blank(&self.link) {
            return err!(400, "link_required");
        }
        validate_rating(self.rating)
    }
}

/// Omitted fields keep their previous values.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TourPatch {
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl TourPatch {
    pub fn validate(&self) -> HResult<()> {
        for value in [&self.name, &self.description, &self.link].into_iter().flatten() {
            if is_blank(value) {
                return err!(400, "blank_field");
            }
        }
        match self.rating {
            Some(rating) => validate_rating(rating),
            None => Ok(()),
        }
    }
}

fn validate_rating(rating: f64) -> HResult<()> {
    if !rating.is_finite() {
        return err!(400, "invalid_rating");
    }
    Ok(())
}
