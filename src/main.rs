use dotenvy::dotenv;
use thriftstore::logging::init_tracing;
use thriftstore::router::init_router;
use thriftstore::state::init_app_state;
use thriftstore_config::ServerConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let state = match init_app_state().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Startup failed");
            std::process::exit(1);
        }
    };

    let server_config = ServerConfig::from_env();
    let app = init_router(state);

    let listener = match tokio::net::TcpListener::bind(server_config.bind_address()).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, address = %server_config.bind_address(), "Failed to bind");
            std::process::exit(1);
        }
    };

    info!("Thrift store server is running on port {}", server_config.port);
    info!(
        "Swagger UI available at http://localhost:{}/swagger-ui",
        server_config.port
    );

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }

    info!("Server stopped");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
