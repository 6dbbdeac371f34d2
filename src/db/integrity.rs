//! Foreign key validation, cascading deletes and counter increments.
//!
//! Every operation here runs inside one transaction (or one statement), so a
//! cascade either removes the whole subtree or nothing, and a child is never
//! inserted under a parent that is concurrently being deleted.

use std::collections::BTreeMap;

use derive_more::{Display, Error};
use futures::{future::BoxFuture, FutureExt};
use log::{debug, info};
use sqlx::{Postgres, Transaction};

use crate::error::HandlerError;

use super::Database;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Entity {
    #[display(fmt = "user")]
    User,
    #[display(fmt = "tour")]
    Tour,
    #[display(fmt = "itinerary")]
    Itinerary,
    #[display(fmt = "highlight")]
    Highlight,
    #[display(fmt = "video")]
    Video,
    #[display(fmt = "comment")]
    Comment,
}

impl Entity {
    pub fn table(self) -> &'static str {
        match self {
            Entity::User => "users",
            Entity::Tour => "tours",
            Entity::Itinerary => "itineraries",
            Entity::Highlight => "highlights",
            Entity::Video => "videos",
            Entity::Comment => "comments",
        }
    }

    /// Rows owned by this entity, as `(child, foreign key column)`.
    pub fn children(self) -> &'static [(Entity, &'static str)] {
        match self {
            Entity::User => &[
                (Entity::Tour, "user_id"),
                (Entity::Video, "user_id"),
                (Entity::Comment, "user_id"),
            ],
            Entity::Tour => &[
                (Entity::Itinerary, "tour_id"),
                (Entity::Highlight, "tour_id"),
            ],
            Entity::Video => &[(Entity::Comment, "video_id")],
            Entity::Itinerary | Entity::Highlight | Entity::Comment => &[],
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Counter {
    Views,
    Likes,
}

impl Counter {
    fn column(self) -> &'static str {
        match self {
            Counter::Views => "view_count",
            Counter::Likes => "thumb_up",
        }
    }
}

#[derive(Debug, Display, Error)]
pub enum IntegrityError {
    #[display(fmt = "{} not found", entity)]
    NotFound { entity: Entity },
    #[display(fmt = "storage error: {}", source)]
    Storage { source: sqlx::Error },
}

impl From<sqlx::Error> for IntegrityError {
    fn from(source: sqlx::Error) -> Self {
        IntegrityError::Storage { source }
    }
}

impl From<IntegrityError> for HandlerError {
    fn from(err: IntegrityError) -> Self {
        match err {
            IntegrityError::NotFound { entity } => {
                HandlerError::with_code(404, format!("{}_not_found", entity))
            }
            IntegrityError::Storage { source } => HandlerError::from(source),
        }
    }
}

/// How many rows of each kind a cascading delete removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CascadeReport {
    pub deleted: BTreeMap<Entity, u64>,
}

impl CascadeReport {
    pub fn count(&self, entity: Entity) -> u64 {
        self.deleted.get(&entity).copied().unwrap_or(0)
    }

    fn add(&mut self, entity: Entity, rows: u64) {
        if rows > 0 {
            *self.deleted.entry(entity).or_insert(0) += rows;
        }
    }
}

impl Database {
    /// Opens a transaction in which every listed parent row exists and stays
    /// locked against deletion until commit. If some parents are missing, the
    /// first one in `parents` is reported.
    ///
    /// Rows are locked in the order `delete_cascade` reaches them, owners
    /// before what they own, so the two never wait on each other in a cycle.
    pub async fn begin_with_parents(
        &self,
        parents: &[(Entity, i32)],
    ) -> Result<Transaction<'static, Postgres>, IntegrityError> {
        let mut tx = self.pool.begin().await?;
        let mut missing = Vec::new();

        for (entity, id) in lock_order(parents) {
            let sql = format!("SELECT id FROM {} WHERE id = $1 FOR KEY SHARE", entity.table());
            let found: Option<(i32,)> = sqlx::query_as(&sql)
                .bind(id)
                .fetch_optional(&mut tx)
                .await?;

            if found.is_none() {
                missing.push((entity, id));
            }
        }

        if let Some(&(entity, id)) = parents.iter().find(|p| missing.contains(*p)) {
            debug!("rejecting write, parent {} {} does not exist", entity, id);
            // dropping the transaction rolls it back
            return Err(IntegrityError::NotFound { entity });
        }

        Ok(tx)
    }

    /// Deletes a row together with everything that hangs off it.
    pub async fn delete_cascade(
        &self,
        entity: Entity,
        id: i32,
    ) -> Result<CascadeReport, IntegrityError> {
        let mut tx = self.pool.begin().await?;

        let sql = format!("SELECT id FROM {} WHERE id = $1 FOR UPDATE", entity.table());
        let found: Option<(i32,)> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&mut tx)
            .await?;

        if found.is_none() {
            return Err(IntegrityError::NotFound { entity });
        }

        let mut report = CascadeReport::default();
        delete_rows(&mut tx, entity, vec![id], &mut report).await?;

        tx.commit().await?;

        info!("deleted {} {} ({:?})", entity, id, report.deleted);
        Ok(report)
    }

    /// Bumps a video counter by one in a single statement, so concurrent
    /// increments are never lost.
    pub async fn increment_counter(
        &self,
        video_id: i32,
        counter: Counter,
    ) -> Result<i64, IntegrityError> {
        let sql = format!(
            "UPDATE videos SET {col} = {col} + 1 WHERE id = $1 RETURNING {col}",
            col = counter.column()
        );

        let updated: Option<(i64,)> = sqlx::query_as(&sql)
            .bind(video_id)
            .fetch_optional(&self.pool)
            .await?;

        updated
            .map(|(value,)| value)
            .ok_or(IntegrityError::NotFound {
                entity: Entity::Video,
            })
    }
}

/// `Entity`'s ordering lists owners before the rows they own, matching the
/// order a cascade walks and locks them in.
fn lock_order(parents: &[(Entity, i32)]) -> Vec<(Entity, i32)> {
    let mut ordered = parents.to_vec();
    ordered.sort();
    ordered
}

/// Deletes descendants before the rows themselves so the walk does not rely on
/// the schema's `ON DELETE CASCADE`.
fn delete_rows<'a>(
    tx: &'a mut Transaction<'static, Postgres>,
    entity: Entity,
    ids: Vec<i32>,
    report: &'a mut CascadeReport,
) -> BoxFuture<'a, Result<(), sqlx::Error>> {
    async move {
        if ids.is_empty() {
            return Ok(());
        }

        for &(child, fk) in entity.children() {
            let sql = format!(
                "SELECT id FROM {} WHERE {} = ANY($1) FOR UPDATE",
                child.table(),
                fk
            );
            let child_ids: Vec<(i32,)> = sqlx::query_as(&sql)
                .bind(&ids)
                .fetch_all(&mut *tx)
                .await?;

            let child_ids = child_ids.into_iter().map(|(id,)| id).collect();
            delete_rows(&mut *tx, child, child_ids, &mut *report).await?;
        }

        let sql = format!("DELETE FROM {} WHERE id = ANY($1)", entity.table());
        let rows = sqlx::query(&sql)
            .bind(&ids)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        report.add(entity, rows);
        Ok(())
    }
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descendants(entity: Entity) -> Vec<Entity> {
        let mut out = Vec::new();
        for &(child, _) in entity.children() {
            out.push(child);
            out.extend(descendants(child));
        }
        out
    }

    #[test]
    fn user_cascade_reaches_every_owned_entity() {
        let reached = descendants(Entity::User);
        for entity in [
            Entity::Tour,
            Entity::Itinerary,
            Entity::Highlight,
            Entity::Video,
            Entity::Comment,
        ] {
            assert!(reached.contains(&entity), "{} not reached", entity);
        }
    }

    #[test]
    fn owners_sort_before_what_they_own() {
        for entity in [Entity::User, Entity::Tour, Entity::Video] {
            for child in descendants(entity) {
                assert!(entity < child, "{} must lock before {}", entity, child);
            }
        }
    }

    #[test]
    fn comment_parents_lock_user_first() {
        let order = lock_order(&[(Entity::Video, 1), (Entity::User, 1)]);
        assert_eq!(order, vec![(Entity::User, 1), (Entity::Video, 1)]);
    }

    #[test]
    fn leaves_have_no_children() {
        assert!(Entity::Itinerary.children().is_empty());
        assert!(Entity::Highlight.children().is_empty());
        assert!(Entity::Comment.children().is_empty());
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = HandlerError::from(IntegrityError::NotFound {
            entity: Entity::Video,
        });
        assert_eq!(err.code, 404);
        assert_eq!(err.message, "video_not_found");
    }

    #[test]
    fn report_skips_empty_counts() {
        let mut report = CascadeReport::default();
        report.add(Entity::Tour, 0);
        report.add(Entity::Tour, 2);
        report.add(Entity::Tour, 1);
        assert_eq!(report.count(Entity::Tour), 3);
        assert_eq!(report.count(Entity::Video), 0);
    }
}
