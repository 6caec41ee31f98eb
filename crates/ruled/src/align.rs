//! Column alignment descriptors and their resolution.
//!
//! An alignment descriptor is a string of one letter per column:
//!
//! | Letter | Meaning |
//! |--------|---------|
//! | `l` | left |
//! | `r` | right |
//! | `c` | center (odd slack goes right) |
//! | `n` | none: numbers right, everything else left |
//!
//! A trailing `*` repeats the letter before it for all further columns, so
//! `"lr*"` is left for the first column and right for the rest. Columns with
//! no letter at all fall back to the numeric rule of `n`.
//!
//! Row 0 (the header) and the following rows (the body) each get their own
//! descriptor; see [`Alignment`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides).
    Center,
}

impl Align {
    /// Decode a descriptor letter. `Ok(None)` is the explicit "no alignment".
    fn from_letter(letter: char) -> std::result::Result<Option<Align>, char> {
        match letter {
            'l' => Ok(Some(Align::Left)),
            'r' => Ok(Some(Align::Right)),
            'c' => Ok(Some(Align::Center)),
            'n' => Ok(None),
            other => Err(other),
        }
    }

    /// Pick the alignment for a cell that has no explicit letter.
    pub fn auto(text: &str) -> Align {
        if is_numeric(text) {
            Align::Right
        } else {
            Align::Left
        }
    }

    /// Split `slack` fill characters into (left, right).
    pub fn split(self, slack: usize) -> (usize, usize) {
        match self {
            Align::Left => (0, slack),
            Align::Right => (slack, 0),
            Align::Center => (slack / 2, slack - slack / 2),
        }
    }
}

/// A parsed alignment descriptor for one group of rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlignSpec {
    columns: Vec<Option<Align>>,
    fallback: Option<Align>,
}

impl AlignSpec {
    /// Parse a descriptor such as `"lclr"` or `"cr*"`.
    pub fn parse(field: &'static str, descriptor: &str) -> Result<Self> {
        let letters: Vec<char> = descriptor.chars().collect();
        let invalid = |letter| TableError::InvalidAlignment {
            field,
            descriptor: descriptor.to_string(),
            letter,
        };

        let (explicit, fallback) = match letters.as_slice() {
            [init @ .., last, '*'] => {
                let fallback = Align::from_letter(*last).map_err(invalid)?;
                (&letters[..init.len() + 1], fallback)
            }
            _ => (letters.as_slice(), None),
        };

        let columns = explicit
            .iter()
            .map(|&c| Align::from_letter(c).map_err(invalid))
            .collect::<Result<Vec<_>>>()?;

        Ok(AlignSpec { columns, fallback })
    }

    /// The explicit alignment for `column`, if any.
    pub fn get(&self, column: usize) -> Option<Align> {
        match self.columns.get(column) {
            Some(align) => *align,
            None => self.fallback,
        }
    }
}

/// Header and body alignment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alignment {
    /// Alignment of row 0.
    pub header: AlignSpec,
    /// Alignment of all following rows.
    pub body: AlignSpec,
}

impl Alignment {
    /// Parse `"desc"` (both groups) or `"header,body"`.
    ///
    /// Either side of the comma may be empty.
    pub fn parse(descriptor: &str) -> Result<Self> {
        match descriptor.split_once(',') {
            Some((header, body)) => Ok(Alignment {
                header: AlignSpec::parse("align", header)?,
                body: AlignSpec::parse("align", body)?,
            }),
            None => {
                let spec = AlignSpec::parse("align", descriptor)?;
                Ok(Alignment {
                    header: spec.clone(),
                    body: spec,
                })
            }
        }
    }

    /// The descriptor that governs `row`.
    pub fn for_row(&self, row: usize) -> &AlignSpec {
        if row == 0 {
            &self.header
        } else {
            &self.body
        }
    }

    /// Resolve the alignment of one cell.
    pub fn resolve(&self, row: usize, column: usize, text: &str) -> Align {
        self.for_row(row)
            .get(column)
            .unwrap_or_else(|| Align::auto(text))
    }
}

/// An alignment option as written by a caller or a configuration file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlignArg {
    /// One descriptor for both groups, or `"header,body"`.
    One(String),
    /// `[header, body]`, or `[both]`; `None` means no letters.
    Many(Vec<Option<String>>),
}

impl AlignArg {
    /// Validate and parse into an [`Alignment`].
    pub fn normalize(&self) -> Result<Alignment> {
        let parse = |d: &Option<String>| AlignSpec::parse("align", d.as_deref().unwrap_or(""));
        match self {
            AlignArg::One(descriptor) => Alignment::parse(descriptor),
            AlignArg::Many(items) => match items.as_slice() {
                [both] => {
                    let spec = parse(both)?;
                    Ok(Alignment {
                        header: spec.clone(),
                        body: spec,
                    })
                }
                [header, body] => Ok(Alignment {
                    header: parse(header)?,
                    body: parse(body)?,
                }),
                _ => Err(TableError::AlignmentArity(items.len())),
            },
        }
    }
}

impl From<&str> for AlignArg {
    fn from(s: &str) -> Self {
        AlignArg::One(s.to_string())
    }
}

impl From<String> for AlignArg {
    fn from(s: String) -> Self {
        AlignArg::One(s)
    }
}

impl From<(&str, &str)> for AlignArg {
    fn from((header, body): (&str, &str)) -> Self {
        AlignArg::Many(vec![Some(header.to_string()), Some(body.to_string())])
    }
}

impl From<Vec<Option<&str>>> for AlignArg {
    fn from(items: Vec<Option<&str>>) -> Self {
        AlignArg::Many(items.into_iter().map(|d| d.map(String::from)).collect())
    }
}

impl<const N: usize> From<[Option<&str>; N]> for AlignArg {
    fn from(items: [Option<&str>; N]) -> Self {
        AlignArg::Many(items.iter().map(|d| d.map(String::from)).collect())
    }
}

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("number pattern is valid")
});

/// True if `text` reads as an integer or decimal number.
///
/// Accepts surrounding whitespace, a leading sign, a decimal point and an
/// exponent: `"42"`, `" -3.5 "`, `"+1e3"`, `".5"`, `"1."`. Rejects empty
/// strings, `inf`/`nan`, digit separators and anything with stray characters.
pub fn is_numeric(text: &str) -> bool {
    NUMBER.is_match(text.trim())
}
