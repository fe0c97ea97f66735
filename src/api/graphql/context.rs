use std::sync::Arc;

use crate::storage::TenantStore;

/// Shared resources reachable from resolvers through the schema data
pub struct ApiContext {
    /// Tenant storage backend
    pub store: Arc<dyn TenantStore>,
}

impl ApiContext {
    /// Create a new context around the given store
    pub fn new(store: Arc<dyn TenantStore>) -> Self {
        Self { store }
    }
}
