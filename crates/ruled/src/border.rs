//! Built-in border styles.
//!
//! Each style is a ready-made 7×7 template (see [`crate::template`]). Use
//! [`BorderStyle::ALL`] to list them, or parse one from its name:
//!
//! ```rust
//! use ruled::BorderStyle;
//!
//! let style: BorderStyle = "rounded".parse().unwrap();
//! assert_eq!(style, BorderStyle::Rounded);
//! assert_eq!(style.name(), "rounded");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::style::TableStyle;
use crate::table::Table;
use crate::template::Frame;

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderStyle {
    /// No borders or separators at all.
    #[default]
    None,
    /// ASCII borders with a line under the header: +, -, |
    Ascii,
    /// ASCII borders with a line between every row and `=` under the header.
    AsciiGrid,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    Light,
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    Heavy,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
    /// Column rules and a `=` header line, no outer border.
    Columns,
    /// GitHub-flavored Markdown pipe table.
    Markdown,
}

const NONE: &str = "
0000000
0000000
0000000
0000000
0000000
0000000
0000000
";

const ASCII: &str = "
+-+-+-+
| | | |
+-+-+-+
| | | |
0000000
| | | |
+-+-+-+
";

const ASCII_GRID: &str = "
+-+-+-+
| | | |
+=+=+=+
| | | |
+-+-+-+
| | | |
+-+-+-+
";

const LIGHT: &str = "
┌─┬─┬─┐
│ │ │ │
├─┼─┼─┤
│ │ │ │
0000000
│ │ │ │
└─┴─┴─┘
";

const HEAVY: &str = "
┏━┳━┳━┓
┃ ┃ ┃ ┃
┣━╋━╋━┫
┃ ┃ ┃ ┃
0000000
┃ ┃ ┃ ┃
┗━┻━┻━┛
";

const DOUBLE: &str = "
╔═╦═╦═╗
║ ║ ║ ║
╠═╬═╬═╣
║ ║ ║ ║
0000000
║ ║ ║ ║
╚═╩═╩═╝
";

const ROUNDED: &str = "
╭─┬─┬─╮
│ │ │ │
├─┼─┼─┤
│ │ │ │
0000000
│ │ │ │
╰─┴─┴─╯
";

const COLUMNS: &str = "
0000000
0 | | 0
0=====0
0 | | 0
0000000
0 | | 0
0000000
";

const MARKDOWN: &str = "
0000000
| | | |
|-|-|-|
| | | |
0000000
| | | |
0000000
";

impl BorderStyle {
    /// Every built-in style, in listing order.
    pub const ALL: [BorderStyle; 9] = [
        BorderStyle::None,
        BorderStyle::Ascii,
        BorderStyle::AsciiGrid,
        BorderStyle::Light,
        BorderStyle::Heavy,
        BorderStyle::Double,
        BorderStyle::Rounded,
        BorderStyle::Columns,
        BorderStyle::Markdown,
    ];

    /// The name used in configuration files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Ascii => "ascii",
            BorderStyle::AsciiGrid => "ascii-grid",
            BorderStyle::Light => "light",
            BorderStyle::Heavy => "heavy",
            BorderStyle::Double => "double",
            BorderStyle::Rounded => "rounded",
            BorderStyle::Columns => "columns",
            BorderStyle::Markdown => "markdown",
        }
    }

    /// The template text of this style.
    pub fn template(&self) -> &'static str {
        match self {
            BorderStyle::None => NONE,
            BorderStyle::Ascii => ASCII,
            BorderStyle::AsciiGrid => ASCII_GRID,
            BorderStyle::Light => LIGHT,
            BorderStyle::Heavy => HEAVY,
            BorderStyle::Double => DOUBLE,
            BorderStyle::Rounded => ROUNDED,
            BorderStyle::Columns => COLUMNS,
            BorderStyle::Markdown => MARKDOWN,
        }
    }

    /// Decode the template of this style.
    pub fn frame(&self) -> Result<Frame> {
        Frame::from_template(self.template())
    }

    /// Render a small sample table in this style.
    ///
    /// `align` is an alignment descriptor as accepted by
    /// [`crate::Alignment::parse`]; `None` uses automatic alignment.
    pub fn example(&self, align: Option<&str>) -> Result<String> {
        let mut builder = TableStyle::builder().border_style(*self);
        if let Some(align) = align {
            builder = builder.align(align);
        }
        let mut table = Table::new(builder.build()?);
        table.format_data(sample_rows())
    }
}

fn sample_rows() -> Vec<Vec<String>> {
    let mut rows = vec![vec!["n".to_string(), "n²".into(), "n³".into(), "name".into()]];
    for (n, name) in [(1u32, "one"), (2, "two"), (3, "three"), (12, "twelve")] {
        rows.push(vec![
            n.to_string(),
            (n * n).to_string(),
            (n * n * n).to_string(),
            name.to_string(),
        ]);
    }
    rows
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderStyle {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self> {
        BorderStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| TableError::UnknownBorderStyle(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_style_default() {
        assert_eq!(BorderStyle::default(), BorderStyle::None);
    }

    #[test]
    fn every_template_decodes() {
        for style in BorderStyle::ALL {
            assert!(style.frame().is_ok(), "{} does not decode", style);
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for style in BorderStyle::ALL {
            assert_eq!(style.name().parse::<BorderStyle>().unwrap(), style);
        }
    }

    #[test]
    fn unknown_name() {
        let err = "fancy".parse::<BorderStyle>().unwrap_err();
        assert_eq!(err, TableError::UnknownBorderStyle("fancy".into()));
    }

    #[test]
    fn serde_uses_kebab_case_names() {
        let style: BorderStyle = serde_yaml::from_str("ascii-grid").unwrap();
        assert_eq!(style, BorderStyle::AsciiGrid);
        assert_eq!(serde_json::to_string(&BorderStyle::Light).unwrap(), "\"light\"");
    }

    #[test]
    fn light_frame_glyphs() {
        let frame = BorderStyle::Light.frame().unwrap();
        assert_eq!(frame.corners, ["┌", "┐", "└", "┘"]);
        assert_eq!(frame.row_seps, ["─", ""]);
        assert_eq!(frame.header_cross, ["┼", "┼"]);
    }

    #[test]
    fn ascii_example() {
        insta::assert_snapshot!(BorderStyle::Ascii.example(None).unwrap(), @r"
        +----+-----+------+--------+
        | n  | n²  | n³   | name   |
        +----+-----+------+--------+
        |  1 |   1 |    1 | one    |
        |  2 |   4 |    8 | two    |
        |  3 |   9 |   27 | three  |
        | 12 | 144 | 1728 | twelve |
        +----+-----+------+--------+
        ");
    }

    #[test]
    fn markdown_example() {
        insta::assert_snapshot!(BorderStyle::Markdown.example(Some("l*,r*")).unwrap(), @r"
        | n  | n²  | n³   | name   |
        |----|-----|------|--------|
        |  1 |   1 |    1 |    one |
        |  2 |   4 |    8 |    two |
        |  3 |   9 |   27 |  three |
        | 12 | 144 | 1728 | twelve |
        ");
    }
}
