//! Snapshot stream consumer
//!
//! Opens a `BookSummary` subscription and yields decoded snapshots in
//! arrival order. A subscription ends with exactly one `Err` item, after
//! which the stream is exhausted. Retrying is the caller's business.

mod grpc;
mod types;

pub use grpc::{GrpcConfig, GrpcSource, DEFAULT_ADDRESS};
pub use types::StreamError;

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;

use crate::book::Snapshot;

/// A live subscription
pub type SnapshotStream = Pin<Box<dyn Stream<Item = Result<Snapshot, StreamError>> + Send>>;

/// Anything that can open a snapshot subscription
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Open a new, independent subscription
    async fn subscribe(&self) -> Result<SnapshotStream, StreamError>;
}
