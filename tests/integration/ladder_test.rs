//! Integration tests for merge + render

use book_ladder::book::{merge, PriceLevel, Snapshot};
use book_ladder::proto::{Level, Summary};
use book_ladder::render::{layout, render, screen::line_text, Color};

fn level(exchange: &str, price: f64, amount: f64) -> Level {
    Level {
        exchange: exchange.to_string(),
        price,
        amount,
    }
}

#[test]
fn test_summary_to_frame() {
    let summary = Summary {
        spread: 0.1234567,
        bids: vec![level("Kraken", 100.00000, 1234.5)],
        asks: vec![level("Binance", 100.00001, 7.25)],
    };

    let snapshot = Snapshot::from(summary);
    let grid = render(&merge(&snapshot), snapshot.spread);

    assert_eq!(grid.headers()[2], "0.1234567");
    assert_eq!(grid.rows.len(), 2);
    assert_eq!(grid.rows[0][2].text, "100.0000100");
    assert_eq!(grid.rows[0][3].text, "7.25");
    assert!(grid.rows[0][1].text.is_empty());
    assert_eq!(grid.rows[1][1].text, "1,234.50");
    assert!(grid.rows[1][3].text.is_empty());
}

#[test]
fn test_four_venue_ladder() {
    let snapshot = Snapshot::new(
        vec![
            PriceLevel::new("Binance", 0.06812, 12.5),
            PriceLevel::new("Bitstamp", 0.06811, 3.0),
            PriceLevel::new("Kraken", 0.06812, 40.0),
            PriceLevel::new("Coinbase", 0.06809, 2500.0),
        ],
        vec![
            PriceLevel::new("Binance", 0.06813, 8.0),
            PriceLevel::new("Bitstamp", 0.06815, 1.25),
            PriceLevel::new("Coinbase", 0.06813, 16000.0),
        ],
        0.00001,
    );

    let rows = merge(&snapshot);
    let prices: Vec<f64> = rows.iter().map(|row| row.price).collect();
    assert_eq!(prices, vec![0.06815, 0.06813, 0.06812, 0.06811, 0.06809]);

    let grid = render(&rows, snapshot.spread);
    assert_eq!(grid.headers()[2], "0.0000100");

    // Binance listed first on both sides at shared prices
    assert_eq!(grid.rows[1][4].text, "Binance");
    assert_eq!(grid.rows[1][4].style.color, Some(Color::Cyan));
    assert_eq!(grid.rows[2][0].text, "Binance");
    assert_eq!(grid.rows[4][1].text, "2,500.00");
    assert_eq!(grid.rows[4][0].style.color, Some(Color::Green));
}

#[test]
fn test_layout_is_stable_across_calls() {
    let snapshot = Snapshot::new(
        vec![PriceLevel::new("Bitstamp", 10.0, 1.0)],
        vec![PriceLevel::new("Unknown", 11.0, 1.0)],
        1.0,
    );

    let first: Vec<String> = layout(&render(&merge(&snapshot), snapshot.spread))
        .iter()
        .map(|line| line_text(line))
        .collect();
    let second: Vec<String> = layout(&render(&merge(&snapshot), snapshot.spread))
        .iter()
        .map(|line| line_text(line))
        .collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 6);
}
