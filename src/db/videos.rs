use crate::{
    users::user::UserId,
    videos::video::{NewVideo, Video, VideoId, VideoUpdate},
};

use super::{Database, Entity, IntegrityError};

impl Database {
    pub async fn list_videos(&self) -> Result<Vec<Video>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM videos ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn list_videos_of_user(&self, user_id: UserId) -> Result<Vec<Video>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM videos WHERE user_id = $1 ORDER BY id")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get_video(&self, id: VideoId) -> Result<Option<Video>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM videos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create_video(&self, video: &NewVideo) -> Result<VideoId, IntegrityError> {
        let mut tx = self
            .begin_with_parents(&[(Entity::User, video.user_id)])
            .await?;

        let (id,): (VideoId,) = sqlx::query_as(
            r#"
                INSERT INTO videos (name, thumb_up, view_count, link, p_link, description, user_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id
            "#,
        )
        .bind(&video.name)
        .bind(video.thumb_up)
        .bind(video.view_count)
        .bind(&video.link)
        .bind(&video.p_link)
        .bind(&video.description)
        .bind(video.user_id)
        .fetch_one(&mut tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Returns false if the video does not exist.
    pub async fn update_video(&self, id: VideoId, update: &VideoUpdate) -> Result<bool, sqlx::Error> {
        let rows_affected = sqlx::query(
            r#"
                UPDATE videos SET
                    name = $2,
                    description = COALESCE($3, description),
                    link = COALESCE($4, link),
                    p_link = COALESCE($5, p_link)
                WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.description)
        .bind(&update.link)
        .bind(&update.p_link)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected > 0)
    }
}
