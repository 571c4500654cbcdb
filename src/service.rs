//! Breach lookup service.
//!
//! Turns a [`ServiceConfig`] into a ready [`BreachClient`]: the configuration
//! is validated, the endpoint selected and the transport built up front, so a
//! bad CA file or endpoint surfaces before the first lookup.

use crate::config::ServiceConfig;
use crate::lookup::BreachClient;
use crate::transport::Transport;
use crate::types::{LookupResult, Result};
use tracing::debug;

pub struct BreachService {
    client: BreachClient,
}

impl BreachService {
    /// Create a new service from its configuration.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;

        let transport = Transport::build(&config.transport_config())?;
        let endpoint = config.endpoint();
        debug!("Using endpoint {}", endpoint);

        Ok(Self {
            client: BreachClient::new(endpoint, transport),
        })
    }

    /// Use an already configured client.
    pub fn from_client(client: BreachClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &BreachClient {
        &self.client
    }

    pub async fn check_email(&self, email: &str) -> Result<LookupResult> {
        self.client.check_email(email).await
    }
}
