use utoipa::OpenApi;

pub mod auth_url;
pub mod logout;
pub mod redirect;
pub mod userinfo;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(auth_url::auth_url)
        .service(redirect::redirect)
        .service(userinfo::userinfo)
        .service(logout::logout);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "sso", description = "Login through the third party identity provider")
    ),
    paths(
        auth_url::auth_url,
        redirect::redirect,
        userinfo::userinfo,
        logout::logout
    ),
    components(schemas(
        auth_url::AuthUrlResponse,
        crate::sso::manager::Identity,
    ))
)]
pub struct SsoApiDocs;

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use actix_web::{
        http::{header, StatusCode},
        test,
        web::Data,
        App,
    };
    use futures::{future::BoxFuture, FutureExt};
    use serde_json::{json, Value};

    use crate::{
        auth::MemorySessionStore,
        options,
        sso::{
            provider::{AuthorizationRequest, ProviderError, TokenGrant},
            IdentityProvider, SsoManager, SsoSession, SSO_COOKIE,
        },
    };

    struct EchoProvider;

    impl IdentityProvider for EchoProvider {
        fn authorization_url(
            &self,
            state: &str,
            _code_challenge: &str,
        ) -> Result<AuthorizationRequest, ProviderError> {
            Ok(AuthorizationRequest {
                url: format!("https://idp.test/authorize?{}", state),
                nonce: "n".into(),
            })
        }

        fn exchange<'a>(
            &'a self,
            code: &'a str,
            _code_verifier: &'a str,
            _nonce: &'a str,
        ) -> BoxFuture<'a, Result<TokenGrant, ProviderError>> {
            let grant = TokenGrant {
                sub: code.to_owned(),
                access_token: "token".into(),
            };
            async move { Ok(grant) }.boxed()
        }

        fn user_info<'a>(
            &'a self,
            sub: &'a str,
            _access_token: &'a str,
        ) -> BoxFuture<'a, Result<Value, ProviderError>> {
            let profile = json!({ "sub": sub });
            async move { Ok(profile) }.boxed()
        }
    }

    fn sso_manager() -> (Data<SsoManager>, Arc<MemorySessionStore<SsoSession>>) {
        let sessions = Arc::new(MemorySessionStore::new(Duration::from_secs(60)));
        let manager = SsoManager::new(Arc::new(EchoProvider), sessions.clone());
        (Data::new(manager), sessions)
    }

    fn location(res: &actix_web::dev::ServiceResponse) -> String {
        res.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned()
    }

    #[actix_web::test]
    async fn login_round_trip() {
        let (manager, _) = sso_manager();
        let app =
            test::init_service(App::new().app_data(manager).configure(super::configure_app)).await;

        let req = test::TestRequest::get()
            .uri("/api/auth-url?preference=tours")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let cookie = res
            .response()
            .cookies()
            .find(|c| c.name() == SSO_COOKIE)
            .unwrap()
            .into_owned();
        assert_eq!(cookie.http_only(), Some(true));

        let body: Value = test::read_body_json(res).await;
        let url = url::Url::parse(body["url"].as_str().unwrap()).unwrap();
        let state = url.query().unwrap().to_owned();

        let req = test::TestRequest::get()
            .uri(&format!(
                "/api/redirect?code=alice&state={}",
                url::form_urlencoded::byte_serialize(state.as_bytes()).collect::<String>()
            ))
            .cookie(cookie.clone())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), format!("{}/logged-in", *options::FRONTEND_ORIGIN));

        let req = test::TestRequest::get()
            .uri("/api/userinfo")
            .cookie(cookie.clone())
            .to_request();
        let identity: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(identity["sub"], "alice");
        assert_eq!(identity["preference"], "tours");

        let req = test::TestRequest::get()
            .uri("/api/logout")
            .cookie(cookie.clone())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/api/userinfo")
            .cookie(cookie)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn forged_state_redirects_to_error() {
        let (manager, sessions) = sso_manager();
        let app =
            test::init_service(App::new().app_data(manager).configure(super::configure_app)).await;

        let req = test::TestRequest::get().uri("/api/auth-url").to_request();
        let res = test::call_service(&app, req).await;
        let cookie = res
            .response()
            .cookies()
            .find(|c| c.name() == SSO_COOKIE)
            .unwrap()
            .into_owned();

        let req = test::TestRequest::get()
            .uri("/api/redirect?code=mallory&state=ref%3Dforged")
            .cookie(cookie.clone())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), format!("{}/error", *options::FRONTEND_ORIGIN));

        use crate::auth::SessionStore;
        let session = sessions.get(cookie.value()).unwrap();
        assert!(session.grant.is_none());
    }

    #[actix_web::test]
    async fn callback_without_session_redirects_to_error() {
        let (manager, _) = sso_manager();
        let app =
            test::init_service(App::new().app_data(manager).configure(super::configure_app)).await;

        let req = test::TestRequest::get()
            .uri("/api/redirect?code=x&state=y")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert!(location(&res).ends_with("/error"));

        // missing query parameters are a failed login too
        let req = test::TestRequest::get().uri("/api/redirect").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert!(location(&res).ends_with("/error"));
    }

    #[actix_web::test]
    async fn logout_without_session_succeeds() {
        let (manager, _) = sso_manager();
        let app =
            test::init_service(App::new().app_data(manager).configure(super::configure_app)).await;

        let req = test::TestRequest::get().uri("/api/logout").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
