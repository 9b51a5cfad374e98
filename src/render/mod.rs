//! Ladder rendering
//!
//! Turns a merged ladder into a five-column grid of styled cells:
//! `[Exchange, Bids, <spread>, Asks, Exchange]`. Rendering is a pure
//! transform; writing the grid to a terminal lives in [`screen`].

pub mod format;
pub mod screen;
pub mod style;

pub use screen::{layout, FrameSink, Screen};
pub use style::{venue_color, Color, Style};

use crate::book::{MergedRow, PriceLevel};

/// Number of columns in the ladder
pub const COLUMNS: usize = 5;

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Column header and presentation
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub header: String,
    pub align: Align,
    /// Style applied to body cells that carry no style of their own
    pub style: Style,
}

/// A single piece of styled text
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub text: String,
    pub style: Style,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::PLAIN,
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// An empty cell with no style hint
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A fully formatted frame, ready for the screen
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub columns: [Column; COLUMNS],
    /// Style applied to the header row
    pub header_style: Style,
    pub rows: Vec<[Cell; COLUMNS]>,
}

impl Grid {
    /// Header texts in column order
    pub fn headers(&self) -> [&str; COLUMNS] {
        let [a, b, c, d, e] = &self.columns;
        [
            a.header.as_str(),
            b.header.as_str(),
            c.header.as_str(),
            d.header.as_str(),
            e.header.as_str(),
        ]
    }
}

/// Render a merged ladder with the snapshot's spread as the middle header
pub fn render(rows: &[MergedRow<'_>], spread: f64) -> Grid {
    Grid {
        columns: columns(spread),
        header_style: Style::fg(Color::Magenta).bold(),
        rows: rows.iter().map(render_row).collect(),
    }
}

fn columns(spread: f64) -> [Column; COLUMNS] {
    [
        Column {
            header: "Exchange".to_string(),
            align: Align::Center,
            style: Style::PLAIN,
        },
        Column {
            header: "Bids".to_string(),
            align: Align::Right,
            style: Style::fg(Color::BrightGreen),
        },
        Column {
            header: format::fixed7(spread),
            align: Align::Center,
            style: Style::PLAIN,
        },
        Column {
            header: "Asks".to_string(),
            align: Align::Left,
            style: Style::fg(Color::BrightRed),
        },
        Column {
            header: "Exchange".to_string(),
            align: Align::Center,
            style: Style::PLAIN,
        },
    ]
}

fn render_row(row: &MergedRow<'_>) -> [Cell; COLUMNS] {
    [
        venue_cell(row.bid),
        amount_cell(row.bid),
        Cell::plain(format::fixed7(row.price)),
        amount_cell(row.ask),
        venue_cell(row.ask),
    ]
}

fn venue_cell(level: Option<&PriceLevel>) -> Cell {
    match level {
        Some(level) => Cell::styled(level.venue.clone(), Style::fg(venue_color(&level.venue))),
        None => Cell::empty(),
    }
}

fn amount_cell(level: Option<&PriceLevel>) -> Cell {
    match level {
        Some(level) => Cell::plain(format::amount(level.amount)),
        None => Cell::empty(),
    }
}
