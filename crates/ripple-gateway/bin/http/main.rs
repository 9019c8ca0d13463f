mod cli;

use crate::cli::CLI;
use anyhow::Context;
use clap::Parser;
use ripple_gateway::{spawn_refresh, App, AppState};
use ripple_redirector::{Redirector, RedirectorService};
use ripple_storage::JsonFileRepository;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    ripple_telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        mappings = %config.mappings.display(),
        client_ip_header = %config.client_ip_header,
        "starting gateway server"
    );

    let redirector: Arc<dyn Redirector> = Arc::new(
        RedirectorService::load(JsonFileRepository::new(&config.mappings))
            .await
            .with_context(|| format!("loading {}", config.mappings.display()))?,
    );

    if let Some(secs) = config.refresh_interval_secs {
        info!(interval_secs = secs, "periodic mapping refresh enabled");
        spawn_refresh(Arc::clone(&redirector), Duration::from_secs(secs));
    }

    let state = AppState::new(redirector, config.client_ip_header);
    let app = App::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
