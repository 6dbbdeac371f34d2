use actix_web::web::Data;
use sqlx::{Pool, Postgres};

pub mod comments;
pub mod highlights;
pub mod integrity;
pub mod itineraries;
pub mod tours;
pub mod users;
pub mod videos;

pub use integrity::{CascadeReport, Counter, Entity, IntegrityError};

pub type DB = Data<Database>;

pub struct Database {
    pub pool: Pool<Postgres>,
}

impl Database {
    pub fn with_pool(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}
