use std::sync::Arc;

use auth::TokenCodec;
use contacts_service::config::Config;
use contacts_service::contact::ports::ContactRepository;
use contacts_service::contact::ports::ContactServicePort;
use contacts_service::contact::service::ContactService;
use contacts_service::inbound::http::router::create_router;
use contacts_service::repositories::InMemoryContactRepository;
use contacts_service::repositories::InMemoryCredentialStore;
use contacts_service::repositories::PostgresContactRepository;
use contacts_service::repositories::PostgresCredentialStore;
use contacts_service::user::guard::AccessGuard;
use contacts_service::user::ports::AccessGuardPort;
use contacts_service::user::ports::AuthServicePort;
use contacts_service::user::ports::CredentialStore;
use contacts_service::user::service::AuthService;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

type Services = (
    Arc<dyn AuthServicePort>,
    Arc<dyn AccessGuardPort>,
    Arc<dyn ContactServicePort>,
);

fn wire_services<S, CR>(
    credential_store: Arc<S>,
    contact_repository: Arc<CR>,
    token_codec: Arc<TokenCodec>,
    config: &Config,
) -> Services
where
    S: CredentialStore,
    CR: ContactRepository,
{
    let auth_service = AuthService::new(
        Arc::clone(&credential_store),
        Arc::clone(&token_codec),
        config.jwt.token_ttl(),
    );
    let access_guard = AccessGuard::new(credential_store, token_codec);
    let contact_service = ContactService::new(contact_repository);

    (
        Arc::new(auth_service),
        Arc::new(access_guard),
        Arc::new(contact_service),
    )
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contacts_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "contacts-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        database_configured = config.database.is_configured(),
        token_ttl_minutes = config.jwt.expiration_minutes,
        "Configuration loaded"
    );

    let token_codec = Arc::new(TokenCodec::new(config.jwt.secret.as_bytes()));

    let (auth_service, access_guard, contact_service) = if config.database.is_configured() {
        let pg_pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect(&config.database.url)
            .await?;
        tracing::info!(
            max_connections = config.database.max_connections,
            database = "postgresql",
            "Database connection pool created"
        );

        sqlx::migrate!("./migrations").run(&pg_pool).await?;
        tracing::info!(database = "postgresql", "Database migrations completed");

        wire_services(
            Arc::new(PostgresCredentialStore::new(pg_pool.clone())),
            Arc::new(PostgresContactRepository::new(pg_pool)),
            token_codec,
            &config,
        )
    } else {
        tracing::warn!("No database configured, using in-memory stores");

        wire_services(
            Arc::new(InMemoryCredentialStore::new()),
            Arc::new(InMemoryContactRepository::new()),
            token_codec,
            &config,
        )
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, access_guard, contact_service);

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
