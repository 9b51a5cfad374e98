//! gRPC snapshot source

use super::{SnapshotSource, SnapshotStream, StreamError};
use crate::book::Snapshot;
use crate::config::ServerConfig;
use crate::proto::{Empty, OrderbookAggregatorClient};
use async_trait::async_trait;
use futures_util::stream;
use std::time::Duration;
use tonic::transport::Endpoint;

/// Default aggregator address
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:50051";

/// Connection settings for [`GrpcSource`]
#[derive(Debug, Clone)]
pub struct GrpcConfig {
    /// Server URI; `http://` is assumed when no scheme is given
    pub address: String,
    /// Upper bound on establishing the connection
    pub connect_timeout: Duration,
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl GrpcConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    pub fn connect_timeout(mut self, d: Duration) -> Self {
        self.connect_timeout = d;
        self
    }

    /// Address with a scheme, ready for an [`Endpoint`]
    pub fn uri(&self) -> String {
        let address = self.address.trim();
        if address.contains("://") {
            address.to_string()
        } else {
            format!("http://{address}")
        }
    }
}

impl From<&ServerConfig> for GrpcConfig {
    fn from(config: &ServerConfig) -> Self {
        GrpcConfig::new(config.address.clone())
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
    }
}

/// Subscribes to `BookSummary` over a fresh channel per call
pub struct GrpcSource {
    config: GrpcConfig,
}

impl GrpcSource {
    pub fn new(config: GrpcConfig) -> Self {
        Self { config }
    }

    pub fn address(&self) -> &str {
        &self.config.address
    }

    fn endpoint(&self) -> Result<Endpoint, StreamError> {
        let uri = self.config.uri();
        Endpoint::from_shared(uri.clone())
            .map(|endpoint| endpoint.connect_timeout(self.config.connect_timeout))
            .map_err(|_| StreamError::InvalidAddress(uri))
    }
}

#[async_trait]
impl SnapshotSource for GrpcSource {
    async fn subscribe(&self) -> Result<SnapshotStream, StreamError> {
        let endpoint = self.endpoint()?;
        tracing::info!(address = %self.config.uri(), "Connecting to aggregator");

        let channel = endpoint.connect().await?;
        let mut client = OrderbookAggregatorClient::new(channel);
        let response = client.book_summary(Empty {}).await?;
        let summaries = response.into_inner();

        tracing::info!("BookSummary subscription open");

        // Yield snapshots until the first failure, which is emitted once.
        let snapshots = stream::unfold(Some(summaries), |state| async move {
            let mut summaries = state?;
            match summaries.message().await {
                Ok(Some(summary)) => Some((Ok(Snapshot::from(summary)), Some(summaries))),
                Ok(None) => Some((Err(StreamError::Closed), None)),
                Err(status) => Some((Err(StreamError::from(status)), None)),
            }
        });

        Ok(Box::pin(snapshots))
    }
}
