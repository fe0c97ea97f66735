use async_graphql::{Context, Result};
use tracing::error;

use crate::api::graphql::{context::ApiContext, types::Tenant};

/// Resolves all tenants, in storage order and unmodified
///
/// # Errors
/// Returns an error if the storage read fails
pub async fn resolve_tenants(ctx: &Context<'_>) -> Result<Vec<Tenant>> {
    let store = &ctx.data_unchecked::<ApiContext>().store;

    let records = store.list_tenants().await.map_err(|e| {
        error!("Failed to list tenants: {}", e);
        e
    })?;

    Ok(records.into_iter().map(Tenant::from).collect())
}
