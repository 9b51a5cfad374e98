//! book-ladder: terminal viewer for a consolidated order book
//!
//! This library provides the core components for:
//! - Subscribing to an aggregator's `BookSummary` gRPC stream
//! - Merging per-venue best bids and asks into one price ladder
//! - Rendering the ladder as a styled five-column table
//! - Driving the subscribe/render loop with an explicit failure policy

pub mod book;
pub mod cli;
pub mod config;
pub mod display;
pub mod proto;
pub mod render;
pub mod stream;
pub mod telemetry;
