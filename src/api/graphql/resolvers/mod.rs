mod tenant;

use async_graphql::Object;

use tenant::resolve_tenants;

/// Root query type
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get every tenant. Null, with an error attached, when storage fails.
    async fn tenants(&self, ctx: &async_graphql::Context<'_>) -> async_graphql::Result<Option<Vec<Option<crate::api::graphql::types::Tenant>>>> {
        let tenants = resolve_tenants(ctx).await?;
        Ok(Some(tenants.into_iter().map(Some).collect()))
    }
}
