//! End-to-end tests against a missing server

use book_ladder::config::Config;
use book_ladder::display::{DisplayLoop, ReconnectPolicy};
use book_ladder::render::Screen;
use book_ladder::stream::{GrpcConfig, GrpcSource, StreamError};
use std::time::Duration;

#[test]
fn test_example_config_loads() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.server.address, "http://127.0.0.1:50051");
    assert!(!ReconnectPolicy::from(&config.reconnect).enabled);
}

#[tokio::test]
async fn test_unreachable_server_reports_once_and_stops() {
    let source = GrpcSource::new(
        GrpcConfig::new("127.0.0.1:1").connect_timeout(Duration::from_millis(500)),
    );
    let mut display = DisplayLoop::new(source, Screen::new(Vec::new(), false));

    let report = tokio::time::timeout(Duration::from_secs(5), display.run())
        .await
        .expect("Test timed out");

    assert_eq!(report.frames, 0);
    assert_eq!(report.subscriptions, 0);
    assert!(matches!(report.error, Some(StreamError::Transport(_))));

    let output = String::from_utf8(display.sink().get_ref().clone()).unwrap();
    assert_eq!(output.lines().count(), 1);
    assert!(output.starts_with("Error connecting to gRPC server"));
}
