use madoguchi_core::application::ports::{ClockPort, TokenManagerPort};
use madoguchi_core::config::AppConfig;
use madoguchi_core::domain::{customer::CustomerRepository, profile::ProfileRepository};
use madoguchi_core::infrastructure::{
    database,
    repositories::{PostgresCustomerRepository, PostgresProfileRepository},
    security::token::HmacTokenManager,
    time::SystemClock,
};
use madoguchi_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use madoguchi_core::application::services::ApplicationServices;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let customer_repo: Arc<dyn CustomerRepository> =
        Arc::new(PostgresCustomerRepository::new(pool.clone()));
    let profile_repo: Arc<dyn ProfileRepository> =
        Arc::new(PostgresProfileRepository::new(pool.clone()));

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let token_manager: Arc<TokenManagerPort> = Arc::new(HmacTokenManager::new(
        config.auth_token_secret(),
        config.token_ttl(),
        Arc::clone(&clock),
    ));

    let services = Arc::new(ApplicationServices::new(
        customer_repo,
        profile_repo,
        token_manager,
    ));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
