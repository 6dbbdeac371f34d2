use actix_web::{
    get,
    web::{Data, Json},
    HttpRequest,
};

use crate::{
    error::HResult,
    sso::{manager::Identity, SsoManager, SSO_COOKIE},
};

/// SSO User Info
///
/// Profile of whoever completed the login bound to the `sso_session` cookie,
/// fetched fresh from the identity provider.
#[utoipa::path(
    responses(
        (status = OK, description = "Identity of the logged in person", body = Identity),
        (status = UNAUTHORIZED, description = "No completed sso login", example = json!({"message": "not_authenticated", "code": 401})),
        (status = BAD_GATEWAY, description = "Identity provider failed"),
        (status = GATEWAY_TIMEOUT, description = "Identity provider did not answer in time")
    ),
    tag = "sso"
)]
#[get("/api/userinfo")]
pub async fn userinfo(sm: Data<SsoManager>, req: HttpRequest) -> HResult<Json<Identity>> {
    let cookie = req.cookie(SSO_COOKIE);
    let identity = sm
        .get_identity(cookie.as_ref().map(|c| c.value()))
        .await?;

    Ok(Json(identity))
}
