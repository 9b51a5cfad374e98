//! Terminal output
//!
//! [`layout`] turns a [`Grid`] into boxed text lines without touching the
//! terminal. [`Screen`] writes those lines with crossterm, clearing the
//! whole screen before every frame.

use std::io::{self, IsTerminal, Stdout, Write};

use anyhow::Context;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use super::style::{Color, Style};
use super::{Align, Cell, Grid, COLUMNS};

/// Destination for rendered frames
pub trait FrameSink {
    /// Replace whatever is on screen with this grid
    fn draw(&mut self, grid: &Grid) -> anyhow::Result<()>;

    /// Show a terminal error to the user
    fn report_error(&mut self, message: &str) -> anyhow::Result<()>;
}

/// A run of text sharing one style
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::PLAIN,
        }
    }
}

pub type Line = Vec<Span>;

/// Concatenate the text of a line, dropping styles
pub fn line_text(line: &[Span]) -> String {
    line.iter().map(|span| span.text.as_str()).collect()
}

/// Lay a grid out as a boxed table with a heavy header
pub fn layout(grid: &Grid) -> Vec<Line> {
    let widths = column_widths(grid);
    let mut lines = Vec::with_capacity(grid.rows.len() + 4);

    lines.push(vec![Span::plain(border(&widths, '┏', '━', '┳', '┓'))]);

    let header: Vec<(Cell, Align)> = grid
        .columns
        .iter()
        .map(|column| {
            (
                Cell::styled(column.header.clone(), grid.header_style),
                Align::Center,
            )
        })
        .collect();
    lines.push(table_row(&header, &widths, '┃'));

    lines.push(vec![Span::plain(border(&widths, '┡', '━', '╇', '┩'))]);

    for row in &grid.rows {
        let cells: Vec<(Cell, Align)> = row
            .iter()
            .zip(&grid.columns)
            .map(|(cell, column)| {
                let style = if cell.is_empty() || cell.style.color.is_some() {
                    cell.style
                } else {
                    column.style
                };
                (Cell::styled(cell.text.clone(), style), column.align)
            })
            .collect();
        lines.push(table_row(&cells, &widths, '│'));
    }

    lines.push(vec![Span::plain(border(&widths, '└', '─', '┴', '┘'))]);
    lines
}

fn column_widths(grid: &Grid) -> [usize; COLUMNS] {
    let mut widths = [0; COLUMNS];
    for (width, column) in widths.iter_mut().zip(&grid.columns) {
        *width = column.header.chars().count();
    }
    for row in &grid.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.text.chars().count());
        }
    }
    widths
}

fn border(widths: &[usize], left: char, fill: char, join: char, right: char) -> String {
    let mut out = String::new();
    out.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(join);
        }
        out.extend(std::iter::repeat(fill).take(width + 2));
    }
    out.push(right);
    out
}

fn table_row(cells: &[(Cell, Align)], widths: &[usize], edge: char) -> Line {
    let mut line = Vec::with_capacity(cells.len() * 3 + 1);
    line.push(Span::plain(format!("{edge} ")));

    for (i, ((cell, align), width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push(Span::plain(format!(" {edge} ")));
        }
        let gap = width.saturating_sub(cell.text.chars().count());
        let (left, right) = match align {
            Align::Left => (0, gap),
            Align::Right => (gap, 0),
            Align::Center => (gap / 2, gap - gap / 2),
        };
        if left > 0 {
            line.push(Span::plain(" ".repeat(left)));
        }
        line.push(Span {
            text: cell.text.clone(),
            style: cell.style,
        });
        if right > 0 {
            line.push(Span::plain(" ".repeat(right)));
        }
    }

    line.push(Span::plain(format!(" {edge}")));
    line
}

/// Full-redraw terminal writer
///
/// On a terminal every frame clears the screen and redraws from the top
/// left with colors. Otherwise frames are printed one after another as
/// plain text.
pub struct Screen<W: Write = Stdout> {
    out: W,
    interactive: bool,
}

impl Screen<Stdout> {
    /// Screen on process stdout, interactive when stdout is a terminal
    pub fn stdout() -> anyhow::Result<Self> {
        let interactive = io::stdout().is_terminal();
        let mut screen = Self::new(io::stdout(), interactive);

        if interactive {
            screen
                .out
                .queue(Hide)
                .context("failed to hide terminal cursor")?;
            screen
                .out
                .flush()
                .context("failed to flush terminal output")?;
        }

        Ok(screen)
    }
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, interactive: bool) -> Self {
        Self { out, interactive }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Borrow the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn queue_span(&mut self, span: &Span) -> anyhow::Result<()> {
        if !self.interactive || (span.style.color.is_none() && !span.style.bold) {
            self.out
                .queue(Print(&span.text))
                .context("failed to print span")?;
            return Ok(());
        }

        if let Some(color) = span.style.color {
            self.out
                .queue(SetForegroundColor(color.into()))
                .context("failed to set foreground color")?;
        }
        if span.style.bold {
            self.out
                .queue(SetAttribute(Attribute::Bold))
                .context("failed to set bold attribute")?;
        }
        self.out
            .queue(Print(&span.text))
            .context("failed to print span")?;
        self.out
            .queue(SetAttribute(Attribute::Reset))
            .context("failed to reset attributes")?;
        self.out
            .queue(ResetColor)
            .context("failed to reset color")?;
        Ok(())
    }
}

impl<W: Write> FrameSink for Screen<W> {
    fn draw(&mut self, grid: &Grid) -> anyhow::Result<()> {
        if self.interactive {
            self.out
                .queue(Clear(ClearType::All))
                .context("failed to clear terminal screen")?;
            self.out
                .queue(MoveTo(0, 0))
                .context("failed to move terminal cursor")?;
        }

        for line in layout(grid) {
            for span in &line {
                self.queue_span(span)?;
            }
            self.out
                .queue(Print("\n"))
                .context("failed to end frame line")?;
        }

        self.out.flush().context("failed to flush terminal frame")?;
        Ok(())
    }

    fn report_error(&mut self, message: &str) -> anyhow::Result<()> {
        let span = Span {
            text: message.to_string(),
            style: Style::fg(Color::BrightRed).bold(),
        };
        self.queue_span(&span)?;
        self.out
            .queue(Print("\n"))
            .context("failed to end error line")?;
        self.out.flush().context("failed to flush error output")?;
        Ok(())
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        if !self.interactive {
            return;
        }

        let _ = self.out.queue(Show);
        let _ = self.out.flush();
    }
}
