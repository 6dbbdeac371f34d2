use actix_web::{get, web::Data, HttpRequest, HttpResponse};

use crate::{
    auth::cookies::death_cookie,
    response::MessageResponse,
    sso::{SsoManager, SSO_COOKIE},
};

/// SSO Logout
///
/// Forgets the sso session. Succeeds even without one.
#[utoipa::path(
    responses(
        (status = OK, description = "Logged out", body = MessageResponse)
    ),
    tag = "sso"
)]
#[get("/api/logout")]
pub async fn logout(sm: Data<SsoManager>, req: HttpRequest) -> HttpResponse {
    let cookie = req.cookie(SSO_COOKIE);
    sm.logout(cookie.as_ref().map(|c| c.value()));

    HttpResponse::Ok()
        .cookie(death_cookie(SSO_COOKIE))
        .json(MessageResponse::new("Logged out successfully"))
}
