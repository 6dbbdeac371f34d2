use utoipa::OpenApi;

pub mod create_highlight;
pub mod delete_highlight;
pub mod get_highlight;
pub mod list_highlights;
pub mod list_tour_highlights;
pub mod update_highlight;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(list_highlights::list_highlights)
        .service(list_tour_highlights::list_tour_highlights)
        .service(get_highlight::get_highlight)
        .service(create_highlight::create_highlight)
        .service(update_highlight::update_highlight)
        .service(delete_highlight::delete_highlight);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "highlights")
    ),
    paths(
        list_highlights::list_highlights,
        list_tour_highlights::list_tour_highlights,
        get_highlight::get_highlight,
        create_highlight::create_highlight,
        update_highlight::update_highlight,
        delete_highlight::delete_highlight
    ),
    components(schemas(
        crate::highlights::highlight::Highlight,
        crate::highlights::highlight::HighlightFields,
    ))
)]
pub struct HighlightsApiDocs;
