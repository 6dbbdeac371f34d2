use std::{ops::Deref, sync::Arc};

use actix_web::{web::Data, FromRequest};
use log::error;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    auth::SessionManager,
    error::HandlerError,
    users::user::{Role, UserId},
};

pub type SessionToken = String;

/// Name of the cookie carrying a password session.
pub const SESSION_COOKIE: &str = "Session";

/// Header a client must echo the session token back in.
pub const SESSION_HEADER: &str = "X-Session-Token";

/// The identity bound to a password session.
/// This may be sent directly to the client it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SessionUser {
    pub id: UserId,
    pub email: String,
    #[serde(rename = "type")]
    pub role: Role,
}

/// A request whose session cookie and session header agree and resolve to a
/// live password session.
pub struct UserEx(pub Arc<SessionUser>);

impl Deref for UserEx {
    type Target = Arc<SessionUser>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for UserEx {
    type Error = HandlerError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        _payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        use std::future::ready;

        let sm = match req.app_data::<Data<SessionManager>>() {
            Some(sm) => sm,
            None => {
                error!("SessionManager missing from app data");
                return ready(Err(HandlerError::internal_error()));
            }
        };

        let cookie = req.cookie(SESSION_COOKIE);
        let header = req
            .headers()
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok());

        let user = sm
            .check_session(cookie.as_ref().map(|c| c.value()), header)
            .map(UserEx);

        ready(user.ok_or_else(|| HandlerError::from((401, "access_denied"))))
    }
}
