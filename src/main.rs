use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    middleware::{Condition, Logger},
    web::Data,
    App, HttpServer,
};
use log::{debug, error, info};
use sqlx::postgres::PgPoolOptions;
use utoipa_rapidoc::RapiDoc;

use tours_server::{
    apidocs,
    auth::{
        user::SessionUser, MemorySessionStore, PasswordSessions, SessionManager, SessionStore,
    },
    configure_app,
    db::{Database, DB},
    options,
    sso::{OidcProvider, SsoManager, SsoSession, SsoSessions},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    options::initialize_all();
    options::print_all();

    let db_url = options::db_conn_string();

    // database
    let pool = PgPoolOptions::new()
        .max_connections(*options::DB_POOL_MAX_CONNS)
        .connect(&db_url);

    let pool = match pool.await {
        Ok(pool) => {
            info!("Connected to database successfully!");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if *options::DB_RUN_MIGRATIONS {
        if let Err(e) = sqlx::migrate!().run(&pool).await {
            error!("Failed to run migrations: {}", e);
            std::process::exit(1);
        }
        info!("Database migrations are up to date");
    }

    let db: DB = Data::new(Database::with_pool(pool));

    // password sessions
    let password_sessions: Arc<MemorySessionStore<Arc<SessionUser>>> =
        Arc::new(MemorySessionStore::new(*options::SESSION_TTL));
    let session_manager = Data::new(SessionManager::new(
        Data::clone(&db),
        Arc::clone(&password_sessions) as Arc<PasswordSessions>,
    ));

    // sso sessions
    let provider = match OidcProvider::from_options() {
        Ok(provider) => provider,
        Err(e) => {
            error!("Failed to set up identity provider client: {}", e);
            std::process::exit(1);
        }
    };
    let sso_sessions: Arc<MemorySessionStore<SsoSession>> =
        Arc::new(MemorySessionStore::new(*options::SESSION_TTL));
    let sso_manager = Data::new(SsoManager::new(
        Arc::new(provider),
        Arc::clone(&sso_sessions) as Arc<SsoSessions>,
    ));

    // drop expired sessions now and then
    actix_rt::spawn(async move {
        let mut interval = actix_rt::time::interval(*options::SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let purged = password_sessions.purge_expired() + sso_sessions.purge_expired();
            if purged > 0 {
                debug!("purged {} expired sessions", purged);
            }
        }
    });

    let oapi = apidocs::setup_oapi();

    let mut server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&options::FRONTEND_ORIGIN)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            // add logging middleware
            .wrap(Logger::new("%{r}a %r -> %s in %Dms").log_target("http"))
            .wrap(Condition::new(*options::HANDLE_CORS, cors))
            .app_data(Data::clone(&db))
            .app_data(Data::clone(&session_manager))
            .app_data(Data::clone(&sso_manager))
            .service(RapiDoc::with_openapi("/api-docs/openapi.json", oapi.clone()).path("/rapidoc"))
            .configure(configure_app)
    })
    .workers(*options::NUM_WEB_WORKERS);

    if *options::SSL_ENABLE {
        server = server.bind_rustls_021(options::ssl_bind_addr(), options::ssl_config()?)?;
    }

    if !*options::SSL_ONLY {
        server = server.bind(options::bind_addr())?;
    }

    server.run().await
}
