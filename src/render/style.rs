//! Display colors and the venue color table

/// Color hint attached to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Cyan,
    Yellow,
    Magenta,
    Green,
    White,
    BrightGreen,
    BrightRed,
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Cyan => crossterm::style::Color::DarkCyan,
            Color::Yellow => crossterm::style::Color::DarkYellow,
            Color::Magenta => crossterm::style::Color::DarkMagenta,
            Color::Green => crossterm::style::Color::DarkGreen,
            Color::White => crossterm::style::Color::Grey,
            Color::BrightGreen => crossterm::style::Color::Green,
            Color::BrightRed => crossterm::style::Color::Red,
        }
    }
}

/// Style of a cell: optional color plus weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
}

impl Style {
    /// No color, normal weight
    pub const PLAIN: Style = Style {
        color: None,
        bold: false,
    };

    pub const fn fg(color: Color) -> Self {
        Self {
            color: Some(color),
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Known venues and their colors
const VENUE_COLORS: &[(&str, Color)] = &[
    ("Binance", Color::Cyan),
    ("Bitstamp", Color::Yellow),
    ("Kraken", Color::Magenta),
    ("Coinbase", Color::Green),
];

/// Fallback for venues not in the table
pub const DEFAULT_VENUE_COLOR: Color = Color::White;

/// Look up the display color for a venue name (exact, case-sensitive)
pub fn venue_color(venue: &str) -> Color {
    VENUE_COLORS
        .iter()
        .find(|(name, _)| *name == venue)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_VENUE_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_venues() {
        assert_eq!(venue_color("Binance"), Color::Cyan);
        assert_eq!(venue_color("Bitstamp"), Color::Yellow);
        assert_eq!(venue_color("Kraken"), Color::Magenta);
        assert_eq!(venue_color("Coinbase"), Color::Green);
    }

    #[test]
    fn test_unknown_venue_falls_back() {
        assert_eq!(venue_color("Bybit"), DEFAULT_VENUE_COLOR);
        assert_eq!(venue_color(""), DEFAULT_VENUE_COLOR);
        assert_eq!(venue_color("binance"), DEFAULT_VENUE_COLOR);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::Magenta).bold();
        assert_eq!(style.color, Some(Color::Magenta));
        assert!(style.bold);
        assert_eq!(Style::default(), Style::PLAIN);
    }
}
