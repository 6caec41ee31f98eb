//! The table renderer.
//!
//! A [`Table`] pairs a [`TableStyle`] with a grid of cells. The grid can be
//! given up front or later; every time it is supplied it is measured again,
//! and [`Table::format`] can then be called any number of times.
//!
//! # Example
//!
//! ```rust
//! use ruled::{BorderStyle, Table, TableStyle};
//!
//! let style = TableStyle::builder()
//!     .border_style(BorderStyle::Ascii)
//!     .align("r*")
//!     .build()
//!     .unwrap();
//!
//! let table = Table::new(style).with_data(vec![vec!["*", "10"], vec!["4", "40"]]);
//! assert_eq!(
//!     table.format().unwrap(),
//!     "+---+----+\n\
//!      | * | 10 |\n\
//!      +---+----+\n\
//!      | 4 | 40 |\n\
//!      +---+----+"
//! );
//! ```

use std::borrow::Cow;
use std::fmt::Display;

use crate::align::Align;
use crate::error::{Result, TableError};
use crate::measure::{text_width, Measurement};
use crate::style::TableStyle;

/// A bordered, aligned text table.
#[derive(Clone, Debug, Default)]
pub struct Table {
    style: TableStyle,
    grid: Option<Vec<Vec<String>>>,
    measurement: Measurement,
}

impl Table {
    /// Create a table with no data yet.
    pub fn new(style: TableStyle) -> Self {
        Table {
            style,
            grid: None,
            measurement: Measurement::default(),
        }
    }

    /// Supply the grid while constructing.
    pub fn with_data<G, R, C>(mut self, grid: G) -> Self
    where
        G: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: Display,
    {
        self.fill(grid);
        self
    }

    /// Replace the grid and measure it.
    ///
    /// Every cell is converted to its display string. Rows may differ in
    /// length; the table has as many columns as the longest row.
    pub fn fill<G, R, C>(&mut self, grid: G) -> &mut Self
    where
        G: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: Display,
    {
        let grid: Vec<Vec<String>> = grid
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.to_string()).collect())
            .collect();
        self.measurement = Measurement::of(&grid);
        tracing::debug!(
            rows = self.measurement.rows(),
            columns = self.measurement.columns(),
            "measured table data"
        );
        self.grid = Some(grid);
        self
    }

    /// The measurement of the current grid.
    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    /// Replace the grid, then render.
    pub fn format_data<G, R, C>(&mut self, grid: G) -> Result<String>
    where
        G: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: Display,
    {
        self.fill(grid);
        self.format()
    }

    /// Render the table.
    ///
    /// Returns [`TableError::NoData`] if no grid was ever supplied. An empty
    /// grid is fine and renders only the borders.
    pub fn format(&self) -> Result<String> {
        let grid = self.grid.as_ref().ok_or(TableError::NoData)?;
        let frame = &self.style.frame;
        let mut lines = Vec::with_capacity(grid.len() * 2 + 2);

        lines.extend(self.rule(
            &frame.corners[0],
            &frame.borders[0],
            &frame.top_cross,
            &frame.corners[1],
        ));

        for (row, cells) in grid.iter().enumerate() {
            if row > 0 {
                let slot = slot(row);
                let crosses = if row == 1 {
                    &frame.header_cross
                } else {
                    &frame.body_cross
                };
                lines.extend(self.rule(
                    &frame.left_cross[slot],
                    &frame.row_seps[slot],
                    crosses,
                    &frame.right_cross[slot],
                ));
            }
            lines.push(self.row_line(row, cells));
        }

        lines.extend(self.rule(
            &frame.corners[2],
            &frame.borders[3],
            &frame.bottom_cross,
            &frame.corners[3],
        ));

        tracing::trace!(lines = lines.len(), "formatted table");
        Ok(lines
            .iter()
            .map(|line| self.finish_line(line))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// A horizontal line, or `None` when its fill glyph is absent.
    fn rule(&self, left: &str, fill: &str, crosses: &[String; 2], right: &str) -> Option<String> {
        if fill.is_empty() {
            return None;
        }
        let frame = &self.style.frame;
        let [pad_left, pad_right] = self.style.cell_pad;
        let mut line = joint(left, &frame.borders[1], fill).into_owned();
        for (column, width) in self.measurement.widths().iter().enumerate() {
            if column > 0 {
                let slot = slot(column);
                line.push_str(&joint(&crosses[slot], &frame.column_seps[slot], fill));
            }
            line.push_str(&fill.repeat(width + pad_left + pad_right));
        }
        line.push_str(&joint(right, &frame.borders[2], fill));
        Some(line)
    }

    fn row_line(&self, row: usize, cells: &[String]) -> String {
        let frame = &self.style.frame;
        let mut line = String::from(frame.borders[1].as_str());
        for (column, &width) in self.measurement.widths().iter().enumerate() {
            if column > 0 {
                line.push_str(&frame.column_seps[slot(column)]);
            }
            let text = cells.get(column).map(String::as_str).unwrap_or("");
            let align = self.style.alignment.resolve(row, column, text);
            self.push_cell(&mut line, text, width, align);
        }
        line.push_str(&frame.borders[2]);
        line
    }

    /// Append one cell, padded to `width` plus the cell padding.
    fn push_cell(&self, line: &mut String, text: &str, width: usize, align: Align) {
        let [pad_left, pad_right] = self.style.cell_pad;
        let (fill_left, fill_right) = align.split(width.saturating_sub(text_width(text)));
        let fill = self.style.pad_char;
        line.extend(std::iter::repeat(' ').take(pad_left));
        line.extend(std::iter::repeat(fill).take(fill_left));
        line.push_str(text);
        line.extend(std::iter::repeat(fill).take(fill_right));
        line.extend(std::iter::repeat(' ').take(pad_right));
    }

    fn finish_line(&self, line: &str) -> String {
        let line = if self.style.strip_trailing {
            line.trim_end()
        } else {
            line
        };
        format!("{}{}", self.style.indent, line)
    }
}

/// Slot 0 applies to the first boundary (after column or row 0), slot 1 to
/// all later ones.
fn slot(boundary: usize) -> usize {
    if boundary <= 1 {
        0
    } else {
        1
    }
}

/// The glyph where a horizontal line meets a vertical one.
///
/// Nothing where the vertical line is absent; the line fill, as wide as the
/// vertical line, where the joint itself is absent.
fn joint<'a>(glyph: &'a str, vertical: &str, fill: &'a str) -> Cow<'a, str> {
    if vertical.is_empty() {
        Cow::Borrowed("")
    } else if glyph.is_empty() {
        Cow::Owned(fill.repeat(text_width(vertical)))
    } else {
        Cow::Borrowed(glyph)
    }
}

/// Render `grid` with `style` in one call.
///
/// ```rust
/// use ruled::{format_table, TableStyle};
///
/// let style = TableStyle::builder().column_seps(" | ").cell_pad(0usize).build().unwrap();
/// let out = format_table(vec![vec!["a", "1"], vec!["bb", "22"]], &style).unwrap();
/// assert_eq!(out, "a  |  1\nbb | 22");
/// ```
pub fn format_table<G, R, C>(grid: G, style: &TableStyle) -> Result<String>
where
    G: IntoIterator<Item = R>,
    R: IntoIterator<Item = C>,
    C: Display,
{
    Table::new(style.clone()).with_data(grid).format()
}
