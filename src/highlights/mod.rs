pub mod highlight;
pub mod routes;
