//! Consolidated book snapshot
//!
//! Domain types for one tick of the aggregated feed and the
//! price-ladder merge built on top of them.

mod merge;

pub use merge::{merge, MergedRow};

use std::collections::HashSet;
use std::fmt;

/// A single venue's best price and amount on one side of the book
#[derive(Debug, Clone, PartialEq)]
pub struct PriceLevel {
    /// Venue (exchange) name as sent by the aggregator
    pub venue: String,
    /// Level price
    pub price: f64,
    /// Quantity available at this price
    pub amount: f64,
}

impl PriceLevel {
    /// Create a new price level
    pub fn new(venue: impl Into<String>, price: f64, amount: f64) -> Self {
        Self {
            venue: venue.into(),
            price,
            amount,
        }
    }
}

/// Which list of a snapshot a level belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Bid,
    Ask,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => write!(f, "bid"),
            Side::Ask => write!(f, "ask"),
        }
    }
}

/// One tick of aggregated best bids and asks across venues
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Best bid per venue
    pub bids: Vec<PriceLevel>,
    /// Best ask per venue
    pub asks: Vec<PriceLevel>,
    /// Best ask minus best bid, as computed upstream
    pub spread: f64,
}

/// Data problems found in a snapshot
///
/// These never stop a frame from rendering; they are reported for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Anomaly {
    /// A venue contributed more than one level to the same side
    DuplicateVenue { side: Side, venue: String },
    /// Price is NaN or infinite
    NonFinitePrice { side: Side, venue: String },
    /// Amount is negative, NaN or infinite
    InvalidAmount {
        side: Side,
        venue: String,
        amount: f64,
    },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::DuplicateVenue { side, venue } => {
                write!(f, "{venue} has more than one {side} level")
            }
            Anomaly::NonFinitePrice { side, venue } => {
                write!(f, "{venue} {side} price is not finite")
            }
            Anomaly::InvalidAmount {
                side,
                venue,
                amount,
            } => write!(f, "{venue} {side} amount {amount} is invalid"),
        }
    }
}

impl Snapshot {
    /// Create a snapshot from bid and ask lists
    pub fn new(bids: Vec<PriceLevel>, asks: Vec<PriceLevel>, spread: f64) -> Self {
        Self { bids, asks, spread }
    }

    /// True when neither side has any level
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Collect every data problem in this snapshot, bids first, in input order
    pub fn anomalies(&self) -> Vec<Anomaly> {
        let mut found = Vec::new();
        scan_side(Side::Bid, &self.bids, &mut found);
        scan_side(Side::Ask, &self.asks, &mut found);
        found
    }
}

fn scan_side(side: Side, levels: &[PriceLevel], found: &mut Vec<Anomaly>) {
    let mut seen = HashSet::with_capacity(levels.len());

    for level in levels {
        if !seen.insert(level.venue.as_str()) {
            found.push(Anomaly::DuplicateVenue {
                side,
                venue: level.venue.clone(),
            });
        }
        if !level.price.is_finite() {
            found.push(Anomaly::NonFinitePrice {
                side,
                venue: level.venue.clone(),
            });
        }
        if !level.amount.is_finite() || level.amount < 0.0 {
            found.push(Anomaly::InvalidAmount {
                side,
                venue: level.venue.clone(),
                amount: level.amount,
            });
        }
    }
}
