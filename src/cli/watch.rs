//! Watch command implementation

use crate::config::Config;
use crate::display::{DisplayLoop, ReconnectPolicy};
use crate::render::Screen;
use crate::stream::{GrpcConfig, GrpcSource};
use clap::Args;

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Aggregator address, overrides `server.address`
    #[arg(short, long)]
    pub server: Option<String>,
}

impl WatchArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut grpc = GrpcConfig::from(&config.server);
        if let Some(server) = &self.server {
            grpc.address = server.clone();
        }
        let policy = ReconnectPolicy::from(&config.reconnect);

        tracing::info!(
            address = %grpc.address,
            reconnect = policy.enabled,
            "Starting book ladder"
        );

        let source = GrpcSource::new(grpc);
        let screen = Screen::stdout()?;
        let mut display = DisplayLoop::new(source, screen).with_policy(policy);

        let report = display
            .run_until(async {
                if tokio::signal::ctrl_c().await.is_err() {
                    std::future::pending::<()>().await;
                }
            })
            .await;

        tracing::info!(
            frames = report.frames,
            subscriptions = report.subscriptions,
            failed = report.error.is_some(),
            "Book ladder stopped"
        );

        Ok(())
    }
}
