//! Wire types for the `orderbook` gRPC package
//!
//! Messages and the client are generated from `proto/orderbook.proto` by
//! `build.rs`.

tonic::include_proto!("orderbook");

pub use orderbook_aggregator_client::OrderbookAggregatorClient;

use crate::book::{PriceLevel, Snapshot};

impl From<Level> for PriceLevel {
    fn from(level: Level) -> Self {
        PriceLevel {
            venue: level.exchange,
            price: level.price,
            amount: level.amount,
        }
    }
}

impl From<Summary> for Snapshot {
    fn from(summary: Summary) -> Self {
        Snapshot {
            bids: summary.bids.into_iter().map(PriceLevel::from).collect(),
            asks: summary.asks.into_iter().map(PriceLevel::from).collect(),
            spread: summary.spread,
        }
    }
}
