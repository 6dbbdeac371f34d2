use std::sync::Arc;

use actix_web::web;
use log::{debug, error, warn};

use crate::{crypto, db::DB, util::constant_time_compare};

use super::{
    session_store::SessionStore,
    user::{SessionToken, SessionUser},
};

pub type PasswordSessions = dyn SessionStore<Arc<SessionUser>>;

pub struct SessionManager {
    db: DB,
    sessions: Arc<PasswordSessions>,
}

pub enum SessionAuthResult {
    Failure,
    /// Credentials could not be checked at all.
    Unavailable,
    Success {
        user: Arc<SessionUser>,
        session: SessionToken,
    },
}

impl SessionManager {
    pub fn new(db: DB, sessions: Arc<PasswordSessions>) -> Self {
        Self { db, sessions }
    }

    pub async fn auth_new_session(&self, email: &str, password: &str) -> SessionAuthResult {
        let record = match self.db.get_credentials(email).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!("login for unknown email rejected");
                return SessionAuthResult::Failure;
            }
            Err(e) => {
                error!("Failed to get user from db: {}", e);
                return SessionAuthResult::Unavailable;
            }
        };

        // sso-only accounts have no password to check against
        let hash = match record.password_hash {
            Some(hash) => hash,
            None => {
                debug!("password login refused for sso account {}", record.id);
                return SessionAuthResult::Failure;
            }
        };

        let password = password.to_owned();
        let verified = web::block(move || crypto::verify(&password, &hash))
            .await
            .unwrap_or_else(|e| {
                warn!("password verification did not complete: {}", e);
                false
            });

        if !verified {
            return SessionAuthResult::Failure;
        }

        let user = Arc::new(SessionUser {
            id: record.id,
            email: record.email,
            role: record.role,
        });

        let session = crypto::generate_session_token();
        self.sessions.insert(session.clone(), Arc::clone(&user));

        SessionAuthResult::Success { user, session }
    }

    /// Resolves a session only when the token echoed in the header is exactly
    /// the one from the cookie.
    pub fn check_session(
        &self,
        cookie_token: Option<&str>,
        header_token: Option<&str>,
    ) -> Option<Arc<SessionUser>> {
        let (cookie_token, header_token) = (cookie_token?, header_token?);

        if !constant_time_compare(cookie_token, header_token) {
            return None;
        }

        self.sessions.get(cookie_token)
    }

    /// Forgets a session. Unknown sessions are ignored.
    pub fn erase_session(&self, session: &str) -> bool {
        self.sessions.remove(session).is_some()
    }
}
