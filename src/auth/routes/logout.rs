use actix_web::{get, web::Data, HttpRequest, HttpResponse};
use log::debug;

use crate::{
    auth::{cookies::death_cookie, user::SESSION_COOKIE, SessionManager},
    response::MessageResponse,
};

/// Logout
///
/// Ends the password session named by the `Session` cookie. Logging out
/// without a session, or with one that already ended, still succeeds.
#[utoipa::path(
    responses(
        (status = OK, description = "Logged out", body = MessageResponse)
    ),
    tag = "identity"
)]
#[get("/auth/logout")]
pub async fn logout(sm: Data<SessionManager>, req: HttpRequest) -> HttpResponse {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if !sm.erase_session(cookie.value()) {
            debug!("logout for a session that was already gone");
        }
    }

    HttpResponse::Ok()
        .cookie(death_cookie(SESSION_COOKIE))
        .json(MessageResponse::new("Logged out successfully"))
}
