//! # Folio Server
//!
//! Main entry point for the Folio content API: loads the layered
//! configuration, connects the MySQL pool, wires repositories and services
//! into the shared application state and serves the Axum router until a
//! shutdown signal arrives.

use folio_config::{ConfigLoader, LoggingConfig};
use folio_core::{FolioError, FolioResult};
use folio_repository::{
    create_pool, DatabasePool, MySqlAuthorRepository, MySqlFormSubmissionRepository,
    MySqlGroupRepository, MySqlMediaRepository, MySqlMenuRepository, MySqlNodeRepository,
    MySqlPageRepository, MySqlRedirectRepository, MySqlRoleRepository,
    MySqlSiteConfigRepository, MySqlTranslationRepository, MySqlUserRepository,
};
use folio_rest::{create_router, AppState};
use folio_service::{PageServiceImpl, TranslationServiceImpl, UserServiceImpl};
use std::sync::Arc;
use tokio::signal;
use tracing::info;

mod startup;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Logging may not be initialized yet when configuration loading fails.
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> FolioResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    init_logging(&config.logging);
    startup::print_banner();

    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    let state = build_state(db_pool.clone());
    let router = create_router(state, &config.security, &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FolioError::internal(format!("Failed to bind {addr}: {e}")))?;

    startup::print_startup_info(config.server.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FolioError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Wires the MySQL repositories and the services on top of them into the
/// shared application state.
fn build_state(db_pool: Arc<DatabasePool>) -> AppState {
    let node_repository = Arc::new(MySqlNodeRepository::new(db_pool.clone()));
    let page_repository = Arc::new(MySqlPageRepository::new(db_pool.clone()));
    let media_repository = Arc::new(MySqlMediaRepository::new(db_pool.clone()));
    let menu_repository = Arc::new(MySqlMenuRepository::new(db_pool.clone()));
    let user_repository = Arc::new(MySqlUserRepository::new(db_pool.clone()));
    let group_repository = Arc::new(MySqlGroupRepository::new(db_pool.clone()));
    let role_repository = Arc::new(MySqlRoleRepository::new(db_pool.clone()));
    let redirect_repository = Arc::new(MySqlRedirectRepository::new(db_pool.clone()));
    let site_config_repository = Arc::new(MySqlSiteConfigRepository::new(db_pool.clone()));
    let translation_repository = Arc::new(MySqlTranslationRepository::new(db_pool.clone()));
    let author_repository = Arc::new(MySqlAuthorRepository::new(db_pool.clone()));
    let form_submission_repository = Arc::new(MySqlFormSubmissionRepository::new(db_pool));

    let page_service = Arc::new(PageServiceImpl::new(page_repository.clone()));
    let translation_service = Arc::new(TranslationServiceImpl::new(translation_repository.clone()));
    let user_service = Arc::new(UserServiceImpl::new(user_repository.clone()));

    AppState {
        node_repository,
        media_repository,
        menu_repository,
        user_repository,
        group_repository,
        role_repository,
        redirect_repository,
        site_config_repository,
        translation_repository,
        author_repository,
        form_submission_repository,
        page_service,
        translation_service,
        user_service,
    }
}

fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let registry = tracing_subscriber::registry().with(filter);
    if config.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            info!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => info!("Failed to install signal handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
