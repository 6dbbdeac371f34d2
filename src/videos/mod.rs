pub mod routes;
pub mod video;
