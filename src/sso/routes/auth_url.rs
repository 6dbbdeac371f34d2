use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    auth::cookies::build_session_cookie,
    error::HResult,
    sso::{SsoManager, SSO_COOKIE},
};

#[derive(Deserialize, IntoParams)]
pub struct AuthUrlQuery {
    /// Opaque value handed back by `/api/userinfo` after login
    #[param(example = "tours")]
    preference: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AuthUrlResponse {
    #[schema(example = "https://api.id.gov.sg/v2/oauth/authorize?response_type=code&...")]
    url: String,
}

/// Begin SSO Login
///
/// Returns the identity provider url to send the browser to, and sets the
/// `sso_session` cookie the callback will need.
#[utoipa::path(
    params(AuthUrlQuery),
    responses(
        (status = OK, description = "Authorization url", body = AuthUrlResponse),
        (status = BAD_GATEWAY, description = "Identity provider misconfigured")
    ),
    tag = "sso"
)]
#[get("/api/auth-url")]
pub async fn auth_url(sm: Data<SsoManager>, query: Query<AuthUrlQuery>) -> HResult<HttpResponse> {
    let redirect = sm.begin_login(query.preference.as_deref())?;
    let cookie = build_session_cookie(SSO_COOKIE, &redirect.session_token).finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(AuthUrlResponse { url: redirect.url }))
}
