use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    auth::{
        cookies::build_session_cookie,
        user::{SessionUser, SESSION_COOKIE},
        SessionManager,
    },
    error::{macros::err, HResult},
};

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "a@x.com")]
    email: String,
    #[schema(example = "pw123")]
    password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    user: SessionUser,
    /// Must be echoed back in the `X-Session-Token` header on guarded routes
    session: String,
}

/// Login
///
/// Exchange an email and password for a session. The session is set as an
/// http-only `Session` cookie and also returned in the body.
#[utoipa::path(
    responses(
        (status = UNAUTHORIZED, description = "Unknown email or wrong password", example = json!({"message": "access_denied", "code": 401})),
        (status = INTERNAL_SERVER_ERROR, description = "Credentials could not be checked"),
        (status = OK, description = "Login successful", body = LoginResponse)
    ),
    tag = "identity"
)]
#[post("/auth/login")]
pub async fn login(sm: Data<SessionManager>, req: Json<LoginRequest>) -> HResult<HttpResponse> {
    use crate::auth::SessionAuthResult::*;
    let auth_result = sm.auth_new_session(&req.email, &req.password).await;

    match auth_result {
        Success { user, session } => {
            let session_cookie = build_session_cookie(SESSION_COOKIE, &session).finish();

            Ok(HttpResponse::Ok().cookie(session_cookie).json(LoginResponse {
                user: (*user).clone(),
                session,
            }))
        }
        Failure => err!(401, "access_denied"),
        Unavailable => err!(),
    }
}
