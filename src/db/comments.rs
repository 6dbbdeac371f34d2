use crate::{
    comments::comment::{Comment, CommentUpdate, NewComment},
    users::user::UserId,
    videos::video::VideoId,
};

use super::{Database, Entity, IntegrityError};

impl Database {
    pub async fn list_comments(&self) -> Result<Vec<Comment>, sqlx::Error> {
        sqlx::query_as("SELECT id, description, video_id, user_id FROM comments ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn list_comments_of_user(&self, user_id: UserId) -> Result<Vec<Comment>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, description, video_id, user_id FROM comments WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn list_comments_of_video(
        &self,
        video_id: VideoId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, description, video_id, user_id FROM comments WHERE video_id = $1 ORDER BY id",
        )
        .bind(video_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_comment(&self, id: i32) -> Result<Option<Comment>, sqlx::Error> {
        sqlx::query_as("SELECT id, description, video_id, user_id FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// The video is checked before the author, matching the order errors are reported in.
    pub async fn create_comment(&self, comment: &NewComment) -> Result<i32, IntegrityError> {
        let mut tx = self
            .begin_with_parents(&[
                (Entity::Video, comment.video_id),
                (Entity::User, comment.user_id),
            ])
            .await?;

        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO comments (description, video_id, user_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&comment.description)
        .bind(comment.video_id)
        .bind(comment.user_id)
        .fetch_one(&mut tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Returns false if the comment does not exist.
    pub async fn update_comment(&self, id: i32, update: &CommentUpdate) -> Result<bool, sqlx::Error> {
        let rows_affected = sqlx::query("UPDATE comments SET description = $2 WHERE id = $1")
            .bind(id)
            .bind(&update.description)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
