pub mod routes;
pub mod user;
