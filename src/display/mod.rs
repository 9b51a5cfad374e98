//! Display loop
//!
//! Drives subscribe -> merge -> render -> draw for every snapshot, one
//! frame per snapshot in arrival order, and applies the reconnect policy
//! when the subscription fails.
//!
//! ```text
//! Connecting --ok--> Streaming --error--> Failed --retry--> Connecting
//!     |                                     |
//!     +----------------error----------------+--give up--> Stopped
//! ```

mod policy;

pub use policy::{Backoff, ReconnectPolicy};

use crate::book::{merge, Snapshot};
use crate::render::{render, FrameSink};
use crate::stream::{SnapshotSource, StreamError};
use futures_util::StreamExt;
use std::future::{self, Future};

/// Where the loop is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Connecting,
    Streaming,
    Failed,
    Stopped,
}

/// Outcome of a finished loop
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoopReport {
    /// Snapshots rendered, across all subscriptions
    pub frames: u64,
    /// Subscriptions that were opened successfully
    pub subscriptions: u32,
    /// Failure that stopped the loop; `None` after an external shutdown
    pub error: Option<StreamError>,
}

/// Single-writer render loop over a snapshot source
pub struct DisplayLoop<S, K> {
    source: S,
    sink: K,
    policy: ReconnectPolicy,
    state: LoopState,
}

impl<S, K> DisplayLoop<S, K>
where
    S: SnapshotSource,
    K: FrameSink,
{
    /// Create a loop that stops on the first failure
    pub fn new(source: S, sink: K) -> Self {
        Self {
            source,
            sink,
            policy: ReconnectPolicy::disabled(),
            state: LoopState::Connecting,
        }
    }

    pub fn with_policy(mut self, policy: ReconnectPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Run until the policy gives up
    pub async fn run(&mut self) -> LoopReport {
        self.run_until(future::pending::<()>()).await
    }

    /// Run until the policy gives up or `shutdown` resolves
    pub async fn run_until<F>(&mut self, shutdown: F) -> LoopReport
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut report = LoopReport::default();
        let mut backoff = self.policy.tracker();

        loop {
            self.state = LoopState::Connecting;

            let subscribed = tokio::select! {
                result = self.source.subscribe() => Some(result),
                _ = &mut shutdown => None,
            };
            let Some(subscribed) = subscribed else {
                return self.shut_down(report);
            };

            let failure = match subscribed {
                Ok(mut snapshots) => {
                    report.subscriptions += 1;
                    self.state = LoopState::Streaming;
                    tracing::info!(subscription = report.subscriptions, "Streaming snapshots");

                    loop {
                        let next = tokio::select! {
                            next = snapshots.next() => Some(next),
                            _ = &mut shutdown => None,
                        };
                        match next {
                            None => return self.shut_down(report),
                            Some(Some(Ok(snapshot))) => {
                                backoff.reset();
                                self.present(&snapshot);
                                report.frames += 1;
                            }
                            Some(Some(Err(e))) => break e,
                            Some(None) => break StreamError::Closed,
                        }
                    }
                }
                Err(e) => e,
            };

            self.state = LoopState::Failed;

            match backoff.on_failure() {
                Some(delay) => {
                    tracing::warn!(
                        error = %failure,
                        attempt = backoff.failures(),
                        delay_ms = delay.as_millis() as u64,
                        "Snapshot stream failed, resubscribing"
                    );
                    let resumed = tokio::select! {
                        _ = tokio::time::sleep(delay) => true,
                        _ = &mut shutdown => false,
                    };
                    if !resumed {
                        return self.shut_down(report);
                    }
                }
                None => {
                    tracing::error!(
                        error = %failure,
                        frames = report.frames,
                        "Snapshot stream failed, stopping"
                    );
                    let message = format!("Error connecting to gRPC server: {failure}");
                    if let Err(e) = self.sink.report_error(&message) {
                        tracing::warn!(error = %e, "Failed to report stream error");
                    }
                    self.state = LoopState::Stopped;
                    report.error = Some(failure);
                    return report;
                }
            }
        }
    }

    /// Merge, render and draw one snapshot
    fn present(&mut self, snapshot: &Snapshot) {
        let anomalies = snapshot.anomalies();
        if let Some(first) = anomalies.first() {
            tracing::debug!(
                count = anomalies.len(),
                first = %first,
                "Snapshot has malformed levels"
            );
        }

        let rows = merge(snapshot);
        let grid = render(&rows, snapshot.spread);

        if let Err(e) = self.sink.draw(&grid) {
            tracing::warn!(error = %e, "Failed to draw frame");
        }

        tracing::trace!(
            bids = snapshot.bids.len(),
            asks = snapshot.asks.len(),
            rows = rows.len(),
            "Frame drawn"
        );
    }

    fn shut_down(&mut self, report: LoopReport) -> LoopReport {
        tracing::info!(frames = report.frames, "Display loop shut down");
        self.state = LoopState::Stopped;
        report
    }
}
