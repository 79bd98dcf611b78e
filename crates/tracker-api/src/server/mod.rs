//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use tracker_common::{AppConfig, AppError};
use tracker_db::{
    create_pool, run_migrations, PgCategoryRepository, PgCommentRepository, PgEventRepository,
    PgInviteRepository, PgPool, PgSavedInviteeRepository, PgUserRepository, PoolConfig,
};
use tracker_service::{ServiceContext, ServiceContextBuilder};

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    Ok(api.merge(health_routes()).with_state(state))
}

/// Wire the Postgres repositories into a service context
pub fn create_service_context(
    pool: &PgPool,
    config: &AppConfig,
) -> Result<ServiceContext, AppError> {
    let invite_repo = PgInviteRepository::new(pool.clone())
        .with_lock_timeout(config.admission.lock_timeout());

    ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .category_repo(Arc::new(PgCategoryRepository::new(pool.clone())))
        .event_repo(Arc::new(PgEventRepository::new(pool.clone())))
        .invite_repo(Arc::new(invite_repo))
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .saved_invitee_repo(Arc::new(PgSavedInviteeRepository::new(pool.clone())))
        .admission(config.admission)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        info!(dir = %config.database.migrations_dir, "Running migrations");
        run_migrations(&pool, &config.database.migrations_dir)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let service_context = create_service_context(&pool, &config)?;

    Ok(AppState::new(service_context, pool, config))
}

/// Serve the application on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    run_server(app, listener).await
}
