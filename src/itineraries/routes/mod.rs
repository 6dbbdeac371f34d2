use utoipa::OpenApi;

pub mod create_itinerary;
pub mod delete_itinerary;
pub mod get_itinerary;
pub mod list_itineraries;
pub mod list_tour_itineraries;
pub mod update_itinerary;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(list_itineraries::list_itineraries)
        .service(list_tour_itineraries::list_tour_itineraries)
        .service(get_itinerary::get_itinerary)
        .service(create_itinerary::create_itinerary)
        .service(update_itinerary::update_itinerary)
        .service(delete_itinerary::delete_itinerary);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "itineraries")
    ),
    paths(
        list_itineraries::list_itineraries,
        list_tour_itineraries::list_tour_itineraries,
        get_itinerary::get_itinerary,
        create_itinerary::create_itinerary,
        update_itinerary::update_itinerary,
        delete_itinerary::delete_itinerary
    ),
    components(schemas(
        crate::itineraries::itinerary::Itinerary,
        crate::itineraries::itinerary::ItineraryFields,
    ))
)]
pub struct ItinerariesApiDocs;
