use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wayfarer_media::{CloudinaryClient, CloudinaryConfig, MediaStore, MockMediaStore};

use wayfarer_api::config::ServerConfig;
use wayfarer_api::notifications::{BookingNotifier, EmailNotifier, SmsNotifier};
use wayfarer_api::router::build_app_router;
use wayfarer_api::state::AppState;
use wayfarer_api::background;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wayfarer_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = wayfarer_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    wayfarer_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    wayfarer_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Media host ---
    let media: Arc<dyn MediaStore> = match CloudinaryConfig::from_env() {
        Some(media_config) => {
            tracing::info!(cloud = %media_config.cloud_name, "Media host configured");
            Arc::new(CloudinaryClient::new(media_config))
        }
        None => {
            tracing::warn!("No media host configured; image uploads will be mocked");
            Arc::new(MockMediaStore)
        }
    };

    // --- Notification outbox worker ---
    let notifiers: Vec<Arc<dyn BookingNotifier>> = vec![
        Arc::new(EmailNotifier::from_env()),
        Arc::new(SmsNotifier::from_env()),
    ];
    let outbox_cancel = CancellationToken::new();
    let outbox_handle = tokio::spawn(background::outbox::run(
        pool.clone(),
        notifiers,
        outbox_cancel.clone(),
    ));
    tracing::info!("Notification outbox worker started");

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        media,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    outbox_cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), outbox_handle).await;
    tracing::info!("Notification outbox worker stopped");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
