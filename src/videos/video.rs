use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{macros::err, HResult},
    users::user::UserId,
    util::is_blank,
};

pub type VideoId = i32;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Video {
    #[schema(example = 1)]
    pub id: VideoId,
    #[schema(example = "Video 1")]
    pub name: String,
    /// Like counter
    pub thumb_up: i64,
    pub view_count: i64,
    /// Stored media file, see the upload endpoint
    #[schema(example = "video1.mp4")]
    pub link: String,
    /// Cover image
    #[schema(example = "smu/video_cover_01")]
    pub p_link: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewVideo {
    #[schema(example = "Video 1")]
    pub name: String,
    #[serde(default)]
    pub thumb_up: i64,
    #[serde(default)]
    pub view_count: i64,
    #[schema(example = "video1.mp4")]
    pub link: String,
    #[schema(example = "smu/video_cover_01")]
    pub p_link: String,
    pub description: Option<String>,
    /// Owner, must exist
    pub user_id: UserId,
}

impl NewVideo {
    pub fn validate(&self) -> HResult<()> {
        if is_blank(&self.name) {
            return err!(400, "name_required");
        }
        if is_blank(&self.link) || is_blank(&self.p_link) {
            return err!(400, "link_required");
        }
        if self.thumb_up < 0 || self.view_count < 0 {
            return err!(400, "negative_counter");
        }
        Ok(())
    }
}

/// Counters are never written through an update, they only move through the
/// increment endpoints.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VideoUpdate {
    pub name: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub p_link: Option<String>,
}

impl VideoUpdate {
    pub fn validate(&self) -> HResult<()> {
        if is_blank(&self.name) {
            return err!(400, "name_required");
        }
        for value in [&self.link, &self.p_link].into_iter().flatten() {
            if is_blank(value) {
                return err!(400, "link_required");
            }
        }
        Ok(())
    }
}
