//! The structural glyphs of a table and the 7×7 template that draws them.
//!
//! A template is a small picture of a table with three columns and three
//! rows. Each glyph of a [`Frame`] is read from a fixed position:
//!
//! ```text
//! A-v-.-B    A B C D  corners: top left, top right, bottom left, bottom right
//! | : $ !    - | ! _  borders: top (0,1), left (1,0), right (1,6), bottom (6,1)
//! >=+=,=<    : $      column separators after the first and later columns
//! | : $ !    = -      row separators after the header row and later rows
//! @-*-+-/    v .      top border crossings
//! | : $ !    > @      left border crossings (header line, body lines)
//! C_^_∆_D    < /      right border crossings (header line, body lines)
//!            + ,      header line crossings
//!            * +      body line crossings
//!            ^ ∆      bottom border crossings
//! ```
//!
//! Data cells and repeated line glyphs are not read; they only make the
//! picture look like the table it produces. The character `0`
//! anywhere means "no glyph". An absent top or bottom border or row
//! separator removes that line from the output.
//!
//! Lines may end in a `;` guard so that lines of blanks survive editors and
//! tools that strip trailing whitespace; the guard is removed before the
//! length check. Blanks inside the seven characters are literal glyphs.

use crate::error::{Result, TableError};

/// Rows and columns of a template.
pub const TEMPLATE_SIZE: usize = 7;

/// Optional guard at the end of a template line.
pub const GUARD: char = ';';

/// Template character meaning "no glyph".
pub const ABSENT: char = '0';

/// The border, separator and crossing glyphs of a table.
///
/// Every field is a fixed-size array; an empty string is an absent glyph.
/// For the two-slot fields, slot 0 applies to the first column or row
/// boundary and slot 1 to all following ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    /// Top left, top right, bottom left, bottom right.
    pub corners: [String; 4],
    /// Top, left, right, bottom edge, without corners and crossings.
    pub borders: [String; 4],
    /// Between columns: after the first column, after the others.
    pub column_seps: [String; 2],
    /// Between rows: after the first (header) row, after the others.
    pub row_seps: [String; 2],
    /// Where column separators meet the top border.
    pub top_cross: [String; 2],
    /// Where row separators meet the left border.
    pub left_cross: [String; 2],
    /// Where row separators meet the right border.
    pub right_cross: [String; 2],
    /// Where column separators meet the bottom border.
    pub bottom_cross: [String; 2],
    /// Where column separators cross the header separator line.
    pub header_cross: [String; 2],
    /// Where column separators cross the body separator lines.
    pub body_cross: [String; 2],
}

/// A named group of glyphs in a [`Frame`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Part {
    Corner,
    Border,
    ColumnSep,
    RowSep,
    TopCross,
    LeftCross,
    RightCross,
    BottomCross,
    HeaderCross,
    BodyCross,
}

/// `(part, slot, row, column)` for every glyph a template defines.
const LAYOUT: [(Part, usize, usize, usize); 24] = [
    (Part::Corner, 0, 0, 0),
    (Part::Corner, 1, 0, 6),
    (Part::Corner, 2, 6, 0),
    (Part::Corner, 3, 6, 6),
    (Part::Border, 0, 0, 1),
    (Part::Border, 1, 1, 0),
    (Part::Border, 2, 1, 6),
    (Part::Border, 3, 6, 1),
    (Part::ColumnSep, 0, 1, 2),
    (Part::ColumnSep, 1, 1, 4),
    (Part::RowSep, 0, 2, 1),
    (Part::RowSep, 1, 4, 1),
    (Part::TopCross, 0, 0, 2),
    (Part::TopCross, 1, 0, 4),
    (Part::LeftCross, 0, 2, 0),
    (Part::LeftCross, 1, 4, 0),
    (Part::RightCross, 0, 2, 6),
    (Part::RightCross, 1, 4, 6),
    (Part::BottomCross, 0, 6, 2),
    (Part::BottomCross, 1, 6, 4),
    (Part::HeaderCross, 0, 2, 2),
    (Part::HeaderCross, 1, 2, 4),
    (Part::BodyCross, 0, 4, 2),
    (Part::BodyCross, 1, 4, 4),
];

impl Frame {
    /// Decode a 7×7 template.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ruled::Frame;
    ///
    /// let frame = Frame::from_template(
    ///     "+-+-+-+\n\
    ///      | | | |\n\
    ///      +=+=+=+\n\
    ///      | | | |\n\
    ///      0000000\n\
    ///      | | | |\n\
    ///      +-+-+-+",
    /// )
    /// .unwrap();
    /// assert_eq!(frame.corners[0], "+");
    /// assert_eq!(frame.row_seps, ["=", ""]);
    /// ```
    pub fn from_template(template: &str) -> Result<Frame> {
        let grid = template_grid(template)?;
        let mut frame = Frame::default();
        for &(part, slot, row, col) in LAYOUT.iter() {
            let c = grid[row][col];
            *frame.glyph_mut(part, slot) = if c == ABSENT {
                String::new()
            } else {
                c.to_string()
            };
        }
        tracing::debug!(
            top = !frame.borders[0].is_empty(),
            header_line = !frame.row_seps[0].is_empty(),
            body_lines = !frame.row_seps[1].is_empty(),
            "decoded table template"
        );
        Ok(frame)
    }

    fn glyph_mut(&mut self, part: Part, slot: usize) -> &mut String {
        match part {
            Part::Corner => &mut self.corners[slot],
            Part::Border => &mut self.borders[slot],
            Part::ColumnSep => &mut self.column_seps[slot],
            Part::RowSep => &mut self.row_seps[slot],
            Part::TopCross => &mut self.top_cross[slot],
            Part::LeftCross => &mut self.left_cross[slot],
            Part::RightCross => &mut self.right_cross[slot],
            Part::BottomCross => &mut self.bottom_cross[slot],
            Part::HeaderCross => &mut self.header_cross[slot],
            Part::BodyCross => &mut self.body_cross[slot],
        }
    }
}

/// Split a template into a 7×7 character grid, validating its shape.
fn template_grid(template: &str) -> Result<Vec<Vec<char>>> {
    let mut lines: Vec<&str> = template
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let first = lines.iter().take_while(|line| line.is_empty()).count();
    let lines = &lines[first..];

    if lines.len() != TEMPLATE_SIZE {
        return Err(TableError::TemplateLineCount(lines.len()));
    }

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let line = line.strip_suffix(GUARD).unwrap_or(line);
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != TEMPLATE_SIZE {
                return Err(TableError::TemplateLineWidth {
                    line: i,
                    len: chars.len(),
                });
            }
            Ok(chars)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &str = "
A-v-.-B
| : $ !
>=+=,=<
| : $ !
@-*-+-/
| : $ !
C_^_∆_D
";

    #[test]
    fn every_position_maps_to_its_field() {
        let frame = Frame::from_template(ABC).unwrap();
        assert_eq!(frame.corners, ["A", "B", "C", "D"]);
        assert_eq!(frame.borders, ["-", "|", "!", "_"]);
        assert_eq!(frame.column_seps, [":", "$"]);
        assert_eq!(frame.row_seps, ["=", "-"]);
        assert_eq!(frame.top_cross, ["v", "."]);
        assert_eq!(frame.left_cross, [">", "@"]);
        assert_eq!(frame.right_cross, ["<", "/"]);
        assert_eq!(frame.bottom_cross, ["^", "∆"]);
        assert_eq!(frame.header_cross, ["+", ","]);
        assert_eq!(frame.body_cross, ["*", "+"]);
    }

    #[test]
    fn zero_is_absent() {
        let frame = Frame::from_template(
            "0000000\n0 | 0 0\n0-+-0-0\n0 | 0 0\n0000000\n0 | 0 0\n0000000",
        )
        .unwrap();
        assert_eq!(frame.corners, ["", "", "", ""]);
        assert_eq!(frame.column_seps, ["|", ""]);
        assert_eq!(frame.row_seps, ["-", ""]);
        assert_eq!(frame.header_cross, ["+", ""]);
    }

    #[test]
    fn layout_covers_each_slot_once() {
        let mut seen = std::collections::HashSet::new();
        for &(part, slot, row, col) in LAYOUT.iter() {
            assert!(row < TEMPLATE_SIZE && col < TEMPLATE_SIZE);
            assert!(seen.insert((format!("{:?}", part), slot)));
        }
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn guard_is_stripped_and_blanks_are_literal() {
        let frame = Frame::from_template(
            "\n       ;\n0 | | 0\n0=====0\n0 | | 0\n0000000\n0 | | 0\n0000000\n",
        )
        .unwrap();
        assert_eq!(frame.corners[0], " ");
        assert_eq!(frame.borders[0], " ");
        assert_eq!(frame.column_seps, ["|", "|"]);
    }

    #[test]
    fn crlf_line_endings() {
        let template = ABC.trim_start().replace('\n', "\r\n");
        assert_eq!(
            Frame::from_template(&template).unwrap(),
            Frame::from_template(ABC).unwrap()
        );
    }

    #[test]
    fn too_few_lines() {
        let err = Frame::from_template("0000000\n0000000\n0000000\n0000000\n0000000\n0000000\n")
            .unwrap_err();
        assert_eq!(err, TableError::TemplateLineCount(6));
    }

    #[test]
    fn line_too_long_names_line() {
        let template = "\n0000000\n       ;\n       ;\n       ;\n 0000000;\n       ;\n0000000\n";
        let err = Frame::from_template(template).unwrap_err();
        assert_eq!(err, TableError::TemplateLineWidth { line: 4, len: 8 });
    }

    #[test]
    fn empty_template() {
        assert_eq!(
            Frame::from_template("").unwrap_err(),
            TableError::TemplateLineCount(0)
        );
    }
}
