use utoipa::OpenApi;

pub mod create_comment;
pub mod delete_comment;
pub mod get_comment;
pub mod list_comments;
pub mod update_comment;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(list_comments::list_comments)
        .service(list_comments::list_user_comments)
        .service(list_comments::list_video_comments)
        .service(get_comment::get_comment)
        .service(create_comment::create_comment)
        .service(update_comment::update_comment)
        .service(delete_comment::delete_comment);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "comments")
    ),
    paths(
        list_comments::list_comments,
        list_comments::list_user_comments,
        list_comments::list_video_comments,
        get_comment::get_comment,
        create_comment::create_comment,
        update_comment::update_comment,
        delete_comment::delete_comment
    ),
    components(schemas(
        crate::comments::comment::Comment,
        crate::comments::comment::NewComment,
        crate::comments::comment::CommentUpdate,
    ))
)]
pub struct CommentsApiDocs;
