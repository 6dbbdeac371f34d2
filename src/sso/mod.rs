//! Login through a third party OpenID Connect provider, using the
//! authorization code flow with PKCE.

pub mod manager;
pub mod provider;
pub mod routes;

pub use manager::{SsoManager, SsoSession, SsoSessions};
pub use provider::{IdentityProvider, OidcProvider};

/// Name of the cookie carrying an sso session.
pub const SSO_COOKIE: &str = "sso_session";
