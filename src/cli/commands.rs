//! Server startup: logging, configuration, and the serve loop.

use tracing::{debug, info};

use crate::cli::args::Args;
use crate::config::Config;
use crate::http::router::create_router;
use crate::http::state::AppState;
use crate::{Error, Result};

/// Run the server until ctrl-c
pub async fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    let config = load_configuration(&args)?;
    info!(
        "Serving data from {} on http://{}",
        config.data_dir.display(),
        config.bind_addr
    );

    let state = AppState::new(config.clone());
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| Error::io(format!("Failed to bind {}", config.bind_addr), e))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::io("HTTP server error", e))?;

    info!("Server stopped");
    Ok(())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("daily_temps={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration using layered resolution (defaults -> env -> args)
fn load_configuration(args: &Args) -> Result<Config> {
    Config::resolve(args.data_dir.clone(), args.bind_addr)
}

/// Resolve when ctrl-c is received
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    info!("Received CTRL+C, shutting down gracefully...");
}
