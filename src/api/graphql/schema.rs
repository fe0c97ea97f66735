use std::sync::Arc;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use crate::api::graphql::{context::ApiContext, resolvers::QueryRoot};
use crate::storage::TenantStore;

/// Type alias for the complete GraphQL schema
#[allow(clippy::module_name_repetitions)]
pub type TenantSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Create a new GraphQL schema reading from the given store
#[must_use]
#[allow(clippy::module_name_repetitions)]
pub fn create_schema(store: Arc<dyn TenantStore>) -> TenantSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(ApiContext::new(store))
        .finish()
}
