pub mod itinerary;
pub mod routes;
