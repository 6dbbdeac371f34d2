use utoipa::OpenApi;

pub mod create_tour;
pub mod delete_tour;
pub mod get_tour;
pub mod list_tours;
pub mod list_user_tours;
pub mod update_tour;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(list_tours::list_tours)
        .service(list_user_tours::list_user_tours)
        .service(get_tour::get_tour)
        .service(create_tour::create_tour)
        .service(update_tour::update_tour)
        .service(delete_tour::delete_tour);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "tours")
    ),
    paths(
        list_tours::list_tours,
        list_user_tours::list_user_tours,
        get_tour::get_tour,
        create_tour::create_tour,
        update_tour::update_tour,
        delete_tour::delete_tour
    ),
    components(schemas(
        crate::tours::tour::Tour,
        crate::tours::tour::NewTour,
        crate::tours::tour::TourPatch,
    ))
)]
pub struct ToursApiDocs;
