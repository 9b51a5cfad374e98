//! Integration tests for the display loop

use async_trait::async_trait;
use book_ladder::book::{PriceLevel, Snapshot};
use book_ladder::display::DisplayLoop;
use book_ladder::render::Screen;
use book_ladder::stream::{SnapshotSource, SnapshotStream, StreamError};
use futures_util::stream;

struct FixedSource {
    items: Vec<Result<Snapshot, StreamError>>,
}

#[async_trait]
impl SnapshotSource for FixedSource {
    async fn subscribe(&self) -> Result<SnapshotStream, StreamError> {
        Ok(Box::pin(stream::iter(self.items.clone())))
    }
}

#[tokio::test]
async fn test_plain_screen_gets_one_frame_per_snapshot() {
    let snapshot = Snapshot::new(
        vec![PriceLevel::new("Kraken", 100.0, 1234.5)],
        vec![PriceLevel::new("Binance", 100.00001, 7.25)],
        0.1234567,
    );
    let source = FixedSource {
        items: vec![
            Ok(snapshot.clone()),
            Ok(snapshot),
            Err(StreamError::Transport("reset by peer".into())),
        ],
    };

    let mut display = DisplayLoop::new(source, Screen::new(Vec::new(), false));
    let report = display.run().await;

    assert_eq!(report.frames, 2);
    assert!(report.error.is_some());

    let output = String::from_utf8(display.sink().get_ref().clone()).unwrap();
    assert_eq!(output.matches("0.1234567").count(), 2);
    assert!(output.ends_with(
        "Error connecting to gRPC server: transport error: reset by peer\n"
    ));
}
