use nutri_auth::{PasswordHasher, RequestRateLimiter};
use nutri_config::Config;
use nutri_db::{PoolSettings, open_pool};
use nutri_server::{AppState, ServerError, build_router, logger};

use std::error::Error;
use std::net::SocketAddr;

use log::{debug, error, info, warn};
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Before any other logging
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting nutri-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = open_pool(&PoolSettings {
        path: config.database_path()?,
        max_connections: config.database.max_connections,
        busy_timeout: config.busy_timeout(),
    })
    .await
    .map_err(ServerError::from)?;
    info!("Migrations complete");

    let auth_rate_limiter = if config.rate_limit.enabled {
        Some(RequestRateLimiter::new(nutri_auth::RateLimitConfig {
            max_requests: config.rate_limit.max_requests,
            window_secs: config.rate_limit.window_secs,
        }))
    } else {
        warn!("Rate limiting DISABLED for /auth endpoints");
        None
    };

    if let Some(limiter) = auth_rate_limiter.clone() {
        tokio::spawn(async move {
            let mut sweep = tokio::time::interval(limiter.window());
            loop {
                sweep.tick().await;
                limiter.retain_recent();
                debug!("Rate limiter tracking {} clients", limiter.tracked_clients());
            }
        });
    }

    let app_state = AppState::new(pool.clone(), PasswordHasher::default(), auth_rate_limiter);

    let app = build_router(app_state)
        .layer(ConcurrencyLimitLayer::new(config.server.max_concurrent_requests));

    let bind_addr = config.bind_addr()?;
    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.to_string(),
            source,
        })?;

    // Port 0 means the OS picked one
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal handler, run until killed
            std::future::pending::<()>().await;
        }
    }
}
