//! Table style: the validated, normalized configuration of a table.
//!
//! A [`TableStyle`] only holds fixed-size arrays and parsed descriptors. It is
//! produced by [`TableStyleBuilder::build`], which accepts the loose shapes
//! of [`Glyphs`], [`Padding`] and [`AlignArg`] and rejects malformed values
//! up front, or from a [`StyleConfig`] read from YAML or JSON.
//!
//! # Example
//!
//! ```rust
//! use ruled::{BorderStyle, TableStyle};
//!
//! let style = TableStyle::builder()
//!     .border_style(BorderStyle::Ascii)
//!     .row_seps(["=", "-"])
//!     .align(("c*", "lr*"))
//!     .cell_pad(2usize)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(style.frame.row_seps, ["=", "-"]);
//! assert_eq!(style.cell_pad, [2, 2]);
//! ```

use serde::{Deserialize, Serialize};

use crate::align::{AlignArg, Alignment};
use crate::border::BorderStyle;
use crate::error::{Result, TableError};
use crate::glyphs::{single_char, Glyphs, Padding};
use crate::measure::text_width;
use crate::template::Frame;

/// Complete, normalized table configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableStyle {
    /// Borders, separators and crossings.
    pub frame: Frame,
    /// Blanks left and right of every cell.
    pub cell_pad: [usize; 2],
    /// Fills the alignment slack of a cell.
    pub pad_char: char,
    /// Header and body alignment.
    pub alignment: Alignment,
    /// Prefixed to every output line.
    pub indent: String,
    /// Remove trailing whitespace from every output line.
    pub strip_trailing: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            frame: Frame::default(),
            cell_pad: [1, 1],
            pad_char: ' ',
            alignment: Alignment::default(),
            indent: String::new(),
            strip_trailing: true,
        }
    }
}

impl TableStyle {
    /// Create a style builder.
    pub fn builder() -> TableStyleBuilder {
        TableStyleBuilder::default()
    }

    /// A style drawn from a 7×7 template, everything else default.
    pub fn from_template(template: &str) -> Result<Self> {
        Self::builder().template(template).build()
    }

    /// A style using a built-in border style, everything else default.
    pub fn bordered(border: BorderStyle) -> Result<Self> {
        Self::builder().border_style(border).build()
    }
}

/// Builder for [`TableStyle`].
///
/// A template (or a built-in border style) is decoded first; glyph fields set
/// on the builder then replace the decoded ones. When both a template and a
/// border style are set, the template wins.
#[derive(Clone, Debug, Default)]
pub struct TableStyleBuilder {
    template: Option<String>,
    border_style: Option<BorderStyle>,
    corners: Option<Glyphs>,
    borders: Option<Glyphs>,
    column_seps: Option<Glyphs>,
    row_seps: Option<Glyphs>,
    top_cross: Option<Glyphs>,
    left_cross: Option<Glyphs>,
    right_cross: Option<Glyphs>,
    bottom_cross: Option<Glyphs>,
    header_cross: Option<Glyphs>,
    body_cross: Option<Glyphs>,
    cell_pad: Option<Padding>,
    pad_char: Option<char>,
    align: Option<AlignArg>,
    indent: Option<String>,
    strip_trailing: Option<bool>,
}

impl TableStyleBuilder {
    /// Draw borders and separators from a 7×7 template.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Draw borders and separators from a built-in style.
    pub fn border_style(mut self, border: BorderStyle) -> Self {
        self.border_style = Some(border);
        self
    }

    /// Corners: top left, top right, bottom left, bottom right.
    pub fn corners(mut self, glyphs: impl Into<Glyphs>) -> Self {
        self.corners = Some(glyphs.into());
        self
    }

    /// Edges: top, left, right, bottom.
    pub fn borders(mut self, glyphs: impl Into<Glyphs>) -> Self {
        self.borders = Some(glyphs.into());
        self
    }

    /// Column separators: after the first column, after the others.
    pub fn column_seps(mut self, glyphs: impl Into<Glyphs>) -> Self {
        self.column_seps = Some(glyphs.into());
        self
    }

    /// Row separators: after the header row, after the others.
    pub fn row_seps(mut self, glyphs: impl Into<Glyphs>) -> Self {
        self.row_seps = Some(glyphs.into());
        self
    }

    /// Top border crossings.
    pub fn top_cross(mut self, glyphs: impl Into<Glyphs>) -> Self {
        self.top_cross = Some(glyphs.into());
        self
    }

    /// Left border crossings.
    pub fn left_cross(mut self, glyphs: impl Into<Glyphs>) -> Self {
        self.left_cross = Some(glyphs.into());
        self
    }

    /// Right border crossings.
    pub fn right_cross(mut self, glyphs: impl Into<Glyphs>) -> Self {
        self.right_cross = Some(glyphs.into());
        self
    }

    /// Bottom border crossings.
    pub fn bottom_cross(mut self, glyphs: impl Into<Glyphs>) -> Self {
        self.bottom_cross = Some(glyphs.into());
        self
    }

    /// Header separator line crossings.
    pub fn header_cross(mut self, glyphs: impl Into<Glyphs>) -> Self {
        self.header_cross = Some(glyphs.into());
        self
    }

    /// Body separator line crossings.
    pub fn body_cross(mut self, glyphs: impl Into<Glyphs>) -> Self {
        self.body_cross = Some(glyphs.into());
        self
    }

    /// Cell padding, left and right.
    pub fn cell_pad(mut self, padding: impl Into<Padding>) -> Self {
        self.cell_pad = Some(padding.into());
        self
    }

    /// Fill character for alignment slack.
    pub fn pad_char(mut self, c: char) -> Self {
        self.pad_char = Some(c);
        self
    }

    /// Alignment descriptor(s).
    pub fn align(mut self, align: impl Into<AlignArg>) -> Self {
        self.align = Some(align.into());
        self
    }

    /// Prefix for every output line.
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    /// Whether to strip trailing whitespace from output lines.
    pub fn strip_trailing(mut self, strip: bool) -> Self {
        self.strip_trailing = Some(strip);
        self
    }

    /// Validate and normalize everything into a [`TableStyle`].
    pub fn build(self) -> Result<TableStyle> {
        let mut frame = match (&self.template, self.border_style) {
            (Some(template), _) => Frame::from_template(template)?,
            (None, Some(border)) => border.frame()?,
            (None, None) => Frame::default(),
        };

        overlay(&mut frame.corners, &self.corners, "corners")?;
        overlay(&mut frame.borders, &self.borders, "borders")?;
        overlay(&mut frame.column_seps, &self.column_seps, "column_seps")?;
        overlay(&mut frame.row_seps, &self.row_seps, "row_seps")?;
        overlay(&mut frame.top_cross, &self.top_cross, "top_cross")?;
        overlay(&mut frame.left_cross, &self.left_cross, "left_cross")?;
        overlay(&mut frame.right_cross, &self.right_cross, "right_cross")?;
        overlay(&mut frame.bottom_cross, &self.bottom_cross, "bottom_cross")?;
        overlay(&mut frame.header_cross, &self.header_cross, "header_cross")?;
        overlay(&mut frame.body_cross, &self.body_cross, "body_cross")?;
        fit_frame(&mut frame)?;

        let defaults = TableStyle::default();
        let style = TableStyle {
            frame,
            cell_pad: match &self.cell_pad {
                Some(padding) => padding.normalize()?,
                None => defaults.cell_pad,
            },
            pad_char: self.pad_char.unwrap_or(defaults.pad_char),
            alignment: match &self.align {
                Some(align) => align.normalize()?,
                None => defaults.alignment,
            },
            indent: self.indent.unwrap_or(defaults.indent),
            strip_trailing: self.strip_trailing.unwrap_or(defaults.strip_trailing),
        };

        tracing::debug!(
            template = self.template.is_some(),
            border_style = ?self.border_style,
            cell_pad = ?style.cell_pad,
            "built table style"
        );
        Ok(style)
    }
}

/// Make every line of the frame line up with the others.
///
/// Line fills are repeated per character of cell width, so they must be a
/// single character. A joint (corner or crossing) sits on a vertical line: it
/// is dropped where that line is absent and must be as wide as it otherwise.
fn fit_frame(frame: &mut Frame) -> Result<()> {
    for (field, fill) in [
        ("borders", &frame.borders[0]),
        ("borders", &frame.borders[3]),
        ("row_seps", &frame.row_seps[0]),
        ("row_seps", &frame.row_seps[1]),
    ] {
        if text_width(fill) > 1 {
            return Err(TableError::field(field, fill, "must be a single character"));
        }
    }

    let Frame {
        corners,
        borders,
        column_seps,
        top_cross,
        left_cross,
        right_cross,
        bottom_cross,
        header_cross,
        body_cross,
        ..
    } = frame;

    fit_joint(&mut corners[0], &borders[1], "corners")?;
    fit_joint(&mut corners[2], &borders[1], "corners")?;
    fit_joint(&mut corners[1], &borders[2], "corners")?;
    fit_joint(&mut corners[3], &borders[2], "corners")?;
    for slot in 0..2 {
        fit_joint(&mut left_cross[slot], &borders[1], "left_cross")?;
        fit_joint(&mut right_cross[slot], &borders[2], "right_cross")?;
    }
    for (field, joints) in [
        ("top_cross", top_cross),
        ("bottom_cross", bottom_cross),
        ("header_cross", header_cross),
        ("body_cross", body_cross),
    ] {
        for (joint, vertical) in joints.iter_mut().zip(column_seps.iter()) {
            fit_joint(joint, vertical, field)?;
        }
    }
    Ok(())
}

fn fit_joint(joint: &mut String, vertical: &str, field: &'static str) -> Result<()> {
    if vertical.is_empty() {
        joint.clear();
    } else if !joint.is_empty() && text_width(joint) != text_width(vertical) {
        return Err(TableError::field(
            field,
            joint.as_str(),
            format!("must be as wide as {:?}", vertical),
        ));
    }
    Ok(())
}

fn overlay<const N: usize>(
    slots: &mut [String; N],
    glyphs: &Option<Glyphs>,
    field: &'static str,
) -> Result<()> {
    if let Some(glyphs) = glyphs {
        *slots = glyphs.normalize(field)?;
    }
    Ok(())
}

/// Table style as written in a YAML or JSON configuration file.
///
/// Every key is optional. Glyph keys take a string or a list of strings; an
/// empty string means "no glyph".
///
/// ```yaml
/// border_style: light
/// row_seps: ["─", "┄"]
/// body_cross: "┼"
/// align: ["c*", "lr*"]
/// cell_pad: [1, 2]
/// pad_char: "."
/// indent: "  "
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub template: Option<String>,
    pub border_style: Option<BorderStyle>,
    pub corners: Option<Glyphs>,
    pub borders: Option<Glyphs>,
    pub column_seps: Option<Glyphs>,
    pub row_seps: Option<Glyphs>,
    pub top_cross: Option<Glyphs>,
    pub left_cross: Option<Glyphs>,
    pub right_cross: Option<Glyphs>,
    pub bottom_cross: Option<Glyphs>,
    pub header_cross: Option<Glyphs>,
    pub body_cross: Option<Glyphs>,
    pub cell_pad: Option<Padding>,
    pub pad_char: Option<String>,
    pub align: Option<AlignArg>,
    pub indent: Option<String>,
    pub strip_trailing: Option<bool>,
}

impl StyleConfig {
    /// Parse a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Turn the configuration into a builder, so callers can override it.
    pub fn into_builder(self) -> Result<TableStyleBuilder> {
        let glyphs = |g: Option<Glyphs>| g.map(Glyphs::empty_as_absent);
        let pad_char = match self.pad_char {
            Some(s) => Some(single_char("pad_char", &s)?),
            None => None,
        };
        Ok(TableStyleBuilder {
            template: self.template,
            border_style: self.border_style,
            corners: glyphs(self.corners),
            borders: glyphs(self.borders),
            column_seps: glyphs(self.column_seps),
            row_seps: glyphs(self.row_seps),
            top_cross: glyphs(self.top_cross),
            left_cross: glyphs(self.left_cross),
            right_cross: glyphs(self.right_cross),
            bottom_cross: glyphs(self.bottom_cross),
            header_cross: glyphs(self.header_cross),
            body_cross: glyphs(self.body_cross),
            cell_pad: self.cell_pad,
            pad_char,
            align: self.align,
            indent: self.indent,
            strip_trailing: self.strip_trailing,
        })
    }

    /// Validate into a [`TableStyle`].
    pub fn into_style(self) -> Result<TableStyle> {
        self.into_builder()?.build()
    }
}
