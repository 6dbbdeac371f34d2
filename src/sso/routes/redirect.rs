use actix_web::{
    get,
    http::header,
    web::{Data, Query},
    HttpRequest, HttpResponse,
};
use log::warn;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    options,
    sso::{SsoManager, SSO_COOKIE},
};

#[derive(Deserialize, IntoParams)]
pub struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
}

/// SSO Callback
///
/// Where the identity provider sends the browser back to. Always redirects
/// to the frontend, either to `/logged-in` or to `/error`.
#[utoipa::path(
    params(CallbackQuery),
    responses(
        (status = FOUND, description = "Redirect to the frontend")
    ),
    tag = "sso"
)]
#[get("/api/redirect")]
pub async fn redirect(
    sm: Data<SsoManager>,
    query: Query<CallbackQuery>,
    req: HttpRequest,
) -> HttpResponse {
    let page = match (&query.code, &query.state) {
        (Some(code), Some(state)) => {
            let cookie = req.cookie(SSO_COOKIE);
            match sm
                .complete_login(code, state, cookie.as_ref().map(|c| c.value()))
                .await
            {
                Ok(()) => "logged-in",
                Err(e) => {
                    warn!("sso callback failed: {}", e);
                    "error"
                }
            }
        }
        _ => {
            warn!("sso callback without code or state");
            "error"
        }
    };

    HttpResponse::Found()
        .insert_header((
            header::LOCATION,
            format!("{}/{}", *options::FRONTEND_ORIGIN, page),
        ))
        .finish()
}
