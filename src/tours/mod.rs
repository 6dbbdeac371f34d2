pub mod routes;
pub mod tour;
