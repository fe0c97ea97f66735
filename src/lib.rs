pub mod api;
pub mod client;
pub mod options;
pub mod seed;
pub mod storage;

pub use options::TenantServiceOptions;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    routing::{get, post},
    Router, Server,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::api::graphql::{create_schema, TenantSchema};
use crate::storage::{PgTenantStore, TenantStore};

pub struct TenantService {
    options: TenantServiceOptions,
}

impl TenantService {
    pub fn new(options: TenantServiceOptions) -> Self {
        Self { options }
    }

    /// Prepares storage, then serves GraphQL until the process is interrupted.
    ///
    /// # Errors
    /// Returns an error if the database is unreachable, the table cannot be
    /// created, or the listener fails
    pub async fn run(&self) -> Result<()> {
        let store: Arc<dyn TenantStore> =
            Arc::new(PgTenantStore::connect_lazy(self.options.connect_options()));

        bootstrap(store.as_ref()).await?;

        let schema = create_schema(store);
        let app = router(schema);

        let addr = self.options.listen_addr();
        let server = Server::try_bind(&addr)
            .with_context(|| format!("Failed to bind API server to {addr}"))?
            .serve(app.into_make_service());

        info!("Server ready at http://{}/graphql", server.local_addr());

        server
            .with_graceful_shutdown(async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    error!("Failed to listen for shutdown signal: {}", e);
                }
            })
            .await
            .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

        info!("Server stopped");
        Ok(())
    }
}

/// One-time startup sequence run before the listener accepts traffic.
///
/// Connectivity and table creation failures are fatal. A seeding failure is
/// logged and startup carries on.
///
/// # Errors
/// Returns an error if the store is unreachable or the table cannot be created
pub async fn bootstrap(store: &dyn TenantStore) -> Result<()> {
    store
        .check_connectivity()
        .await
        .context("Database connection failed")?;
    info!("Database connection successful");

    store
        .ensure_schema()
        .await
        .context("Error creating tenants table")?;
    info!("Tenants table ready");

    if seed::seed_sample_tenants(store).await.is_err() {
        error!("Continuing startup without sample data");
    }

    Ok(())
}

/// HTTP routes for the GraphQL endpoint, its playground and a health probe.
pub fn router(schema: TenantSchema) -> Router {
    Router::new()
        .route(
            "/graphql",
            post(crate::api::handlers::graphql_handler).get(crate::api::handlers::graphql_playground),
        )
        .route("/health", get(crate::api::handlers::health_check))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
}
