//! Price ladder merge
//!
//! Folds the per-venue bid and ask lists of a snapshot into one ladder
//! keyed by price, highest price first.

use super::{PriceLevel, Snapshot};

/// One row of the merged ladder
///
/// A side is either fully present (venue and amount from the same level)
/// or absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergedRow<'a> {
    /// Row key
    pub price: f64,
    /// Bid level quoted at exactly this price
    pub bid: Option<&'a PriceLevel>,
    /// Ask level quoted at exactly this price
    pub ask: Option<&'a PriceLevel>,
}

/// Merge a snapshot into a ladder sorted by price, descending
///
/// Prices are compared with `f64::total_cmp`: exact, no tolerance, and
/// total over NaN (which sorts above every number). `-0.0` and `0.0` share
/// one row. When several levels on one side share a price, the first one in
/// input order wins.
pub fn merge(snapshot: &Snapshot) -> Vec<MergedRow<'_>> {
    let mut prices: Vec<f64> = snapshot
        .bids
        .iter()
        .chain(&snapshot.asks)
        .map(|level| row_key(level.price))
        .collect();

    prices.sort_unstable_by(|a, b| b.total_cmp(a));
    prices.dedup_by(|a, b| a.total_cmp(b).is_eq());

    prices
        .into_iter()
        .map(|price| MergedRow {
            price,
            bid: first_at(&snapshot.bids, price),
            ask: first_at(&snapshot.asks, price),
        })
        .collect()
}

fn first_at(levels: &[PriceLevel], price: f64) -> Option<&PriceLevel> {
    levels
        .iter()
        .find(|level| row_key(level.price).total_cmp(&price).is_eq())
}

/// Folds negative zero into zero
fn row_key(price: f64) -> f64 {
    if price == 0.0 {
        0.0
    } else {
        price
    }
}
