use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{macros::err, HResult},
    users::user::UserId,
    util::is_blank,
    videos::video::VideoId,
};

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Comment {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Great tour")]
    pub description: String,
    pub video_id: VideoId,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewComment {
    #[schema(example = "Great tour")]
    pub description: String,
    /// Must exist
    pub video_id: VideoId,
    /// Author, must exist
    pub user_id: UserId,
}

impl NewComment {
    pub fn validate(&self) -> HResult<()> {
        validate_description(&self.description)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CommentUpdate {
    #[schema(example = "Fun tour")]
    pub description: String,
}

impl CommentUpdate {
    pub fn validate(&self) -> HResult<()> {
        validate_description(&self.description)
    }
}

fn validate_description(description: &str) -> HResult<()> {
    if is_blank(description) {
        return err!(400, "description_required");
    }
    Ok(())
}
