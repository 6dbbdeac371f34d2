use std::sync::Arc;

use derive_more::{Display, Error};
use log::{debug, info, warn};
use nanoid::nanoid;
use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;
use utoipa::ToSchema;

use crate::{
    auth::{user::SessionToken, SessionStore},
    crypto::{self, PkcePair},
    error::HandlerError,
    util::constant_time_compare,
};

use super::provider::{IdentityProvider, ProviderError, TokenGrant};

/// Everything remembered about one browser's sso login.
#[derive(Debug, Clone)]
pub struct SsoSession {
    pub state: String,
    pub nonce: String,
    pub code_verifier: String,
    /// Set once the authorization code has been redeemed.
    pub grant: Option<TokenGrant>,
}

pub type SsoSessions = dyn SessionStore<SsoSession>;

pub struct LoginRedirect {
    pub url: String,
    pub session_token: SessionToken,
}

/// The logged in person as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Identity {
    #[schema(example = "u=35")]
    pub sub: String,
    /// The provider's userinfo document, as returned
    #[schema(value_type = Object)]
    pub data: Value,
    /// Whatever the frontend passed to the login url
    #[schema(example = "tours")]
    pub preference: Option<String>,
}

#[derive(Debug, Display, Error)]
pub enum SsoError {
    #[display(fmt = "no sso session")]
    SessionMissing,
    #[display(fmt = "returned state does not match")]
    StateMismatch,
    #[display(fmt = "sso session has not completed login")]
    NotAuthenticated,
    #[display(fmt = "{}", source)]
    Provider { source: ProviderError },
}

impl From<ProviderError> for SsoError {
    fn from(source: ProviderError) -> Self {
        SsoError::Provider { source }
    }
}

impl From<SsoError> for HandlerError {
    fn from(err: SsoError) -> Self {
        match err {
            SsoError::SessionMissing | SsoError::StateMismatch | SsoError::NotAuthenticated => {
                HandlerError::from((401, "not_authenticated"))
            }
            SsoError::Provider {
                source: ProviderError::Timeout,
            } => HandlerError::from((504, "identity_provider_timeout")),
            SsoError::Provider { source } => {
                warn!("identity provider failure: {}", source);
                HandlerError::from((502, "identity_provider_error"))
            }
        }
    }
}

pub struct SsoManager {
    provider: Arc<dyn IdentityProvider>,
    sessions: Arc<SsoSessions>,
}

impl SsoManager {
    pub fn new(provider: Arc<dyn IdentityProvider>, sessions: Arc<SsoSessions>) -> Self {
        Self { provider, sessions }
    }

    /// Starts a login. The returned token must come back with the callback.
    pub fn begin_login(&self, preference: Option<&str>) -> Result<LoginRedirect, SsoError> {
        let pkce = PkcePair::generate();
        let state = encode_state(preference);

        let request = self.provider.authorization_url(&state, &pkce.challenge)?;

        let session_token = crypto::generate_session_token();
        self.sessions.insert(
            session_token.clone(),
            SsoSession {
                state,
                nonce: request.nonce,
                code_verifier: pkce.verifier,
                grant: None,
            },
        );

        Ok(LoginRedirect {
            url: request.url,
            session_token,
        })
    }

    /// Finishes a login from the provider's callback. The provider is only
    /// contacted once the returned state matches the one stored for the session.
    pub async fn complete_login(
        &self,
        code: &str,
        returned_state: &str,
        session_token: Option<&str>,
    ) -> Result<(), SsoError> {
        let token = session_token.ok_or(SsoError::SessionMissing)?;
        let session = self.sessions.get(token).ok_or(SsoError::SessionMissing)?;

        if !constant_time_compare(&session.state, returned_state) {
            return Err(SsoError::StateMismatch);
        }

        let grant = self
            .provider
            .exchange(code, &session.code_verifier, &session.nonce)
            .await?;

        let sub = grant.sub.clone();
        let mut grant = Some(grant);
        let stored = self.sessions.update(token, &mut |s: &mut SsoSession| s.grant = grant.take());

        if !stored {
            // expired or logged out while the exchange was in flight
            return Err(SsoError::SessionMissing);
        }

        info!("sso login completed for subject {}", sub);
        Ok(())
    }

    pub async fn get_identity(&self, session_token: Option<&str>) -> Result<Identity, SsoError> {
        let session = session_token
            .and_then(|token| self.sessions.get(token))
            .ok_or(SsoError::NotAuthenticated)?;

        let grant = session.grant.ok_or(SsoError::NotAuthenticated)?;
        let data = self
            .provider
            .user_info(&grant.sub, &grant.access_token)
            .await?;

        Ok(Identity {
            sub: grant.sub,
            data,
            preference: decode_preference(&session.state),
        })
    }

    /// Ending a session that does not exist is not an error.
    pub fn logout(&self, session_token: Option<&str>) {
        if let Some(token) = session_token {
            if self.sessions.remove(token).is_none() {
                debug!("sso logout for a session that was already gone");
            }
        }
    }
}

fn encode_state(preference: Option<&str>) -> String {
    let mut state = form_urlencoded::Serializer::new(String::new());
    if let Some(preference) = preference {
        state.append_pair("preference", preference);
    }
    state.append_pair("ref", &nanoid!(16));
    state.finish()
}

fn decode_preference(state: &str) -> Option<String> {
    form_urlencoded::parse(state.as_bytes())
        .find(|(key, _)| key == "preference")
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use futures::{future::BoxFuture, FutureExt};
    use serde_json::json;

    use super::*;
    use crate::{auth::MemorySessionStore, sso::provider::AuthorizationRequest};

    #[derive(Default)]
    struct FakeProvider {
        exchanges: AtomicUsize,
        time_out: bool,
    }

    impl IdentityProvider for FakeProvider {
        fn authorization_url(
            &self,
            state: &str,
            code_challenge: &str,
        ) -> Result<AuthorizationRequest, ProviderError> {
            Ok(AuthorizationRequest {
                url: format!("https://idp.test/authorize?state={}&c={}", state, code_challenge),
                nonce: "nonce-1".into(),
            })
        }

        fn exchange<'a>(
            &'a self,
            code: &'a str,
            _code_verifier: &'a str,
            nonce: &'a str,
        ) -> BoxFuture<'a, Result<TokenGrant, ProviderError>> {
            self.exchanges.fetch_add(1, Ordering::SeqCst);
            let result = if self.time_out {
                Err(ProviderError::Timeout)
            } else {
                assert_eq!(nonce, "nonce-1");
                Ok(TokenGrant {
                    sub: format!("sub-for-{}", code),
                    access_token: "at".into(),
                })
            };
            async move { result }.boxed()
        }

        fn user_info<'a>(
            &'a self,
            sub: &'a str,
            access_token: &'a str,
        ) -> BoxFuture<'a, Result<Value, ProviderError>> {
            let profile = json!({ "sub": sub, "token": access_token });
            async move { Ok(profile) }.boxed()
        }
    }

    fn manager(provider: Arc<FakeProvider>) -> SsoManager {
        let sessions = Arc::new(MemorySessionStore::<SsoSession>::new(Duration::from_secs(60)));
        SsoManager::new(provider, sessions)
    }

    fn stored_state(manager: &SsoManager, token: &str) -> String {
        manager.sessions.get(token).unwrap().state
    }

    #[actix_web::test]
    async fn full_login_flow() {
        let provider = Arc::new(FakeProvider::default());
        let sm = manager(Arc::clone(&provider));

        let redirect = sm.begin_login(Some("dark mode")).unwrap();
        assert!(redirect.url.starts_with("https://idp.test/authorize"));

        let state = stored_state(&sm, &redirect.session_token);
        sm.complete_login("code7", &state, Some(&redirect.session_token))
            .await
            .unwrap();

        let identity = sm.get_identity(Some(&redirect.session_token)).await.unwrap();
        assert_eq!(identity.sub, "sub-for-code7");
        assert_eq!(identity.preference.as_deref(), Some("dark mode"));
        assert_eq!(identity.data["token"], "at");
        assert_eq!(provider.exchanges.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn mismatched_state_never_reaches_provider() {
        let provider = Arc::new(FakeProvider::default());
        let sm = manager(Arc::clone(&provider));

        let redirect = sm.begin_login(None).unwrap();
        let result = sm
            .complete_login("code", "ref=forged", Some(&redirect.session_token))
            .await;

        assert!(matches!(result, Err(SsoError::StateMismatch)));
        assert_eq!(provider.exchanges.load(Ordering::SeqCst), 0);

        let identity = sm.get_identity(Some(&redirect.session_token)).await;
        assert!(matches!(identity, Err(SsoError::NotAuthenticated)));
    }

    #[actix_web::test]
    async fn missing_session_never_reaches_provider() {
        let provider = Arc::new(FakeProvider::default());
        let sm = manager(Arc::clone(&provider));

        let result = sm.complete_login("code", "ref=x", None).await;
        assert!(matches!(result, Err(SsoError::SessionMissing)));

        let result = sm.complete_login("code", "ref=x", Some("unknown")).await;
        assert!(matches!(result, Err(SsoError::SessionMissing)));

        assert_eq!(provider.exchanges.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn timeout_maps_to_504() {
        let provider = Arc::new(FakeProvider {
            time_out: true,
            ..Default::default()
        });
        let sm = manager(provider);

        let redirect = sm.begin_login(None).unwrap();
        let state = stored_state(&sm, &redirect.session_token);
        let err = sm
            .complete_login("code", &state, Some(&redirect.session_token))
            .await
            .unwrap_err();

        assert_eq!(HandlerError::from(err).code, 504);
    }

    #[actix_web::test]
    async fn logout_forgets_session() {
        let sm = manager(Arc::new(FakeProvider::default()));
        let redirect = sm.begin_login(None).unwrap();

        sm.logout(Some(&redirect.session_token));
        sm.logout(Some(&redirect.session_token));
        sm.logout(None);

        assert!(sm.sessions.get(&redirect.session_token).is_none());
    }

    #[test]
    fn state_round_trips_preference() {
        let state = encode_state(Some("a&b=c"));
        assert_eq!(decode_preference(&state).as_deref(), Some("a&b=c"));

        let state = encode_state(None);
        assert_eq!(decode_preference(&state), None);
        assert_ne!(encode_state(None), state);
    }
}
