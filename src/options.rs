use std::{fs::File, io::BufReader, net::IpAddr, net::SocketAddr, str::FromStr, time::Duration};

use lazy_static::lazy_static;
use log::{error, info, warn};
use rustls::ServerConfig;

// get and parse an environment variable
// use default value if not set
fn var<T>(name: &str, default: &str) -> T
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Debug,
{
    let given = std::env::var(name).unwrap_or(default.to_owned());
    match given.parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            error!(
                "Invalid config option `{}={}`: {:?} ({}'s default is usually {})",
                name, given, e, name, default
            );
            std::process::exit(1);
        }
    }
}

lazy_static! {
    pub static ref NUM_WEB_WORKERS: usize = var("NUM_WEB_WORKERS", "4");

    static ref DATABASE_URL: String = var("DATABASE_URL", "");
    static ref DB_HOST: String = var("DB_HOST", "127.0.0.1");
    static ref DB_PORT: u16 = var("DB_PORT", "5432");
    static ref DB_USER: String = var("DB_USER", "tours-backend");
    static ref DB_PASSWORD: String = var("DB_PASSWORD", "dev");
    static ref DB_NAME: String = var("DB_NAME", "tours-backend");
    pub static ref DB_POOL_MAX_CONNS: u32 = var("DB_POOL_MAX_CONNS", "5");
    pub static ref DB_RUN_MIGRATIONS: bool = var("DB_RUN_MIGRATIONS", "true");

    pub static ref BIND_ADDR: SocketAddr = var("BIND_ADDR", "127.0.0.1:8080");

    pub static ref SSL_ENABLE: bool = var("SSL_ENABLE", "false");
    pub static ref SSL_ONLY: bool = var("SSL_ONLY", "false");
    pub static ref SSL_BIND_ADDR: SocketAddr = var("SSL_BIND_ADDR", "127.0.0.1:8443");
    static ref SSL_CERT_PATH: String = var("SSL_CERT_PATH", "cert.pem");
    static ref SSL_KEY_PATH: String = var("SSL_KEY_PATH", "key.pem");

    pub static ref HANDLE_CORS: bool = var("HANDLE_CORS", "true");

    /// Where the web frontend lives. Used for cors and for the sso redirects.
    pub static ref FRONTEND_ORIGIN: String = {
        let origin: String = var("FRONTEND_ORIGIN", "http://localhost:5173");
        origin.trim_end_matches('/').to_owned()
    };

    /// Mark session cookies `Secure` and `SameSite=None` so that a frontend on
    /// another origin can send them. Requires https.
    pub static ref COOKIE_SECURE: bool = var("COOKIE_SECURE", "false");

    pub static ref MEDIA_PATH: String = {
        let path: String = var("MEDIA_PATH", "/var/tmp/tours-media");

        // create directory
        if let Err(e) = std::fs::create_dir_all(&path) {
            error!("failed to create directory specified by MEDIA_PATH `{}`: {}", path, e);
            std::process::exit(1);
        }

        let is_read_only = std::fs::metadata(&path)
            .map(|m| m.permissions().readonly())
            .unwrap_or(true);
        if is_read_only {
            warn!("\n\nMEDIA_PATH directory at `{}` is not writable!\nUploads will probably fail!\n\n", path);
        }

        path
    };

    pub static ref SESSION_TTL: Duration = Duration::from_secs(var("SESSION_TTL_SECS", "86400"));
    pub static ref SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(var("SESSION_SWEEP_SECS", "300"));

    pub static ref SSO_ISSUER: String = {
        let issuer: String = var("SSO_ISSUER", "https://api.id.gov.sg/v2");
        issuer.trim_end_matches('/').to_owned()
    };
    pub static ref SSO_CLIENT_ID: String = var("SSO_CLIENT_ID", "");
    pub static ref SSO_CLIENT_SECRET: String = var("SSO_CLIENT_SECRET", "");
    pub static ref SSO_REDIRECT_URI: String = var("SSO_REDIRECT_URI", "http://localhost:8080/api/redirect");
    pub static ref SSO_SCOPES: String = var("SSO_SCOPES", "openid myinfo.name");
    pub static ref SSO_TIMEOUT: Duration = Duration::from_secs(var("SSO_TIMEOUT_SECS", "5"));
}

pub fn db_conn_string() -> String {
    if !DATABASE_URL.is_empty() {
        return DATABASE_URL.clone();
    }

    format!(
        "postgres://{}:{}@{}:{}/{}",
        *DB_USER, *DB_PASSWORD, *DB_HOST, *DB_PORT, *DB_NAME
    )
}

pub fn bind_addr() -> (IpAddr, u16) {
    (BIND_ADDR.ip(), BIND_ADDR.port())
}

pub fn ssl_bind_addr() -> (IpAddr, u16) {
    (SSL_BIND_ADDR.ip(), SSL_BIND_ADDR.port())
}

/// Load the SSL certificate and key files into a rustls config object
///
/// Taken from https://github.com/actix/examples/blob/master/https-tls/rustls/src/main.rs
pub fn ssl_config() -> std::io::Result<rustls::ServerConfig> {
    // init server config builder with safe defaults
    let config = ServerConfig::builder()
        .with_safe_defaults()
        .with_no_client_auth();

    // load TLS key/cert files
    let cert_file = &mut BufReader::new(File::open(&*SSL_CERT_PATH)?);
    let key_file = &mut BufReader::new(File::open(&*SSL_KEY_PATH)?);

    // convert files to key/cert objects
    let cert_chain = rustls_pemfile::certs(cert_file)?
        .into_iter()
        .map(rustls::Certificate)
        .collect();

    let mut keys: Vec<rustls::PrivateKey> = rustls_pemfile::pkcs8_private_keys(key_file)?
        .into_iter()
        .map(rustls::PrivateKey)
        .collect();

    // exit if no keys could be parsed
    if keys.is_empty() {
        error!("Could not locate SSL private key at {}", *SSL_KEY_PATH);
        std::process::exit(1);
    }

    config
        .with_single_cert(cert_chain, keys.remove(0))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

pub fn initialize_all() {
    if !*SSL_ENABLE && *SSL_ONLY {
        error!("SSL_ONLY cannot be true if SSL_ENABLE is false");
        std::process::exit(1);
    }

    lazy_static::initialize(&NUM_WEB_WORKERS);
    lazy_static::initialize(&BIND_ADDR);

    lazy_static::initialize(&SSL_BIND_ADDR);
    lazy_static::initialize(&SSL_CERT_PATH);
    lazy_static::initialize(&SSL_KEY_PATH);

    lazy_static::initialize(&DATABASE_URL);
    lazy_static::initialize(&DB_HOST);
    lazy_static::initialize(&DB_PORT);
    lazy_static::initialize(&DB_USER);
    lazy_static::initialize(&DB_PASSWORD);
    lazy_static::initialize(&DB_NAME);
    lazy_static::initialize(&DB_POOL_MAX_CONNS);

    lazy_static::initialize(&HANDLE_CORS);
    lazy_static::initialize(&FRONTEND_ORIGIN);
    lazy_static::initialize(&COOKIE_SECURE);

    lazy_static::initialize(&SESSION_TTL);
    lazy_static::initialize(&SESSION_SWEEP_INTERVAL);

    if SESSION_TTL.is_zero() {
        error!("SESSION_TTL_SECS must be greater than zero");
        std::process::exit(1);
    }

    if *SESSION_TTL > crate::auth::session_store::MAX_TTL {
        error!(
            "SESSION_TTL_SECS must be at most {}",
            crate::auth::session_store::MAX_TTL.as_secs()
        );
        std::process::exit(1);
    }

    if SESSION_SWEEP_INTERVAL.is_zero() {
        error!("SESSION_SWEEP_SECS must be greater than zero");
        std::process::exit(1);
    }

    lazy_static::initialize(&SSO_ISSUER);
    lazy_static::initialize(&SSO_CLIENT_ID);
    lazy_static::initialize(&SSO_CLIENT_SECRET);
    lazy_static::initialize(&SSO_REDIRECT_URI);
    lazy_static::initialize(&SSO_SCOPES);
    lazy_static::initialize(&SSO_TIMEOUT);

    lazy_static::initialize(&MEDIA_PATH);
}

pub fn print_all() {
    info!("config: Listening on {}", *BIND_ADDR);

    if *SSL_ENABLE {
        info!(
            "config: SSL listening on {}{}",
            *SSL_BIND_ADDR,
            if *SSL_ONLY { " (ssl only)" } else { "" }
        );
    }

    info!("config: {} web workers", *NUM_WEB_WORKERS);

    if DATABASE_URL.is_empty() {
        info!(
            "config: Database: {} at {}:{} ({} max connections)",
            *DB_NAME, *DB_HOST, *DB_PORT, *DB_POOL_MAX_CONNS
        );
    } else {
        info!(
            "config: Database: from DATABASE_URL ({} max connections)",
            *DB_POOL_MAX_CONNS
        );
    }

    info!(
        "config: Frontend origin: {} (cors {})",
        *FRONTEND_ORIGIN,
        if *HANDLE_CORS { "handled" } else { "not handled" }
    );

    if !*COOKIE_SECURE {
        warn!("COOKIE_SECURE is false, session cookies will be sent over plain http");
    }

    info!(
        "config: Sessions expire after {}s, swept every {}s",
        SESSION_TTL.as_secs(),
        SESSION_SWEEP_INTERVAL.as_secs()
    );

    info!(
        "config: SSO issuer: {} (timeout {}s)",
        *SSO_ISSUER,
        SSO_TIMEOUT.as_secs()
    );

    if SSO_CLIENT_ID.is_empty() || SSO_CLIENT_SECRET.is_empty() {
        warn!("SSO_CLIENT_ID or SSO_CLIENT_SECRET is not set, sso logins will fail!");
    }

    info!("config: Uploaded media stored in: {}", *MEDIA_PATH);
}
