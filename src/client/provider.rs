use std::sync::Arc;

use super::{ClientConfig, ClientError, GraphQLClient};

/// Owns the one configured client and lends it to consumers.
///
/// Issues no requests of its own.
#[derive(Clone)]
pub struct ClientProvider {
    client: Arc<GraphQLClient>,
}

impl ClientProvider {
    /// # Errors
    /// Returns an error if the endpoint URL is invalid
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            client: Arc::new(GraphQLClient::new(config)?),
        })
    }

    #[must_use]
    pub fn client(&self) -> Arc<GraphQLClient> {
        Arc::clone(&self.client)
    }
}
