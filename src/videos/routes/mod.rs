use utoipa::OpenApi;

pub mod create_video;
pub mod delete_video;
pub mod download_video;
pub mod get_video;
pub mod increment_counter;
pub mod list_user_videos;
pub mod list_videos;
pub mod update_video;
pub mod upload_video;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(list_videos::list_videos)
        .service(list_user_videos::list_user_videos)
        .service(get_video::get_video)
        .service(upload_video::upload_video)
        .service(download_video::download_video)
        .service(create_video::create_video)
        .service(update_video::update_video)
        .service(increment_counter::increment_view_count)
        .service(increment_counter::increment_like_count)
        .service(delete_video::delete_video);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "videos")
    ),
    paths(
        list_videos::list_videos,
        list_user_videos::list_user_videos,
        get_video::get_video,
        create_video::create_video,
        update_video::update_video,
        delete_video::delete_video,
        increment_counter::increment_view_count,
        increment_counter::increment_like_count,
        upload_video::upload_video,
        download_video::download_video
    ),
    components(schemas(
        crate::videos::video::Video,
        crate::videos::video::NewVideo,
        crate::videos::video::VideoUpdate,
        increment_counter::CounterResponse,
        upload_video::UploadedVideoInfo,
    ))
)]
pub struct VideosApiDocs;
