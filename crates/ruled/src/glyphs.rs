//! Loosely-shaped style values and their normalization.
//!
//! Style fields may be given as a single glyph, a string holding one glyph
//! per slot, a list, or nothing at all. Every one of these shapes is turned
//! into a fixed-size array once, when the style is built, so the renderer
//! only ever sees `[String; N]` and `[usize; 2]`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// A glyph field as written by a caller or a configuration file.
///
/// | Value | Normalized (2 slots) |
/// |-------|----------------------|
/// | `Absent` | `["", ""]` |
/// | `One("|")` | `["|", "|"]` |
/// | `One("|:")` | `["|", ":"]` (one char per slot) |
/// | `One(" | ")` | `[" | ", " | "]` |
/// | `Many(["|"])` | `["|", "|"]` |
/// | `Many(["|", ":"])` | `["|", ":"]` |
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Glyphs {
    /// No glyph; an absent line glyph suppresses its whole line.
    Absent,
    /// One string, broadcast to all slots unless it has one char per slot.
    One(String),
    /// One entry per slot, or a single entry to broadcast.
    Many(Vec<String>),
}

impl Glyphs {
    /// Normalize to exactly `N` slots. `field` names the option in errors.
    pub fn normalize<const N: usize>(&self, field: &'static str) -> Result<[String; N]> {
        match self {
            Glyphs::Absent => Ok(std::array::from_fn(|_| String::new())),
            Glyphs::One(s) => {
                let chars: Vec<char> = s.chars().collect();
                if N > 1 && chars.len() == N {
                    Ok(std::array::from_fn(|i| chars[i].to_string()))
                } else {
                    Ok(std::array::from_fn(|_| s.clone()))
                }
            }
            Glyphs::Many(items) if items.len() == 1 => {
                Ok(std::array::from_fn(|_| items[0].clone()))
            }
            Glyphs::Many(items) if items.len() == N => {
                Ok(std::array::from_fn(|i| items[i].clone()))
            }
            Glyphs::Many(items) => Err(TableError::field(
                field,
                items,
                format!("is not a sequence len 1 or {}", N),
            )),
        }
    }

    /// Treat empty strings from configuration files as absent.
    pub(crate) fn empty_as_absent(self) -> Self {
        match self {
            Glyphs::One(s) if s.is_empty() => Glyphs::Absent,
            other => other,
        }
    }
}

impl From<&str> for Glyphs {
    fn from(s: &str) -> Self {
        Glyphs::One(s.to_string())
    }
}

impl From<String> for Glyphs {
    fn from(s: String) -> Self {
        Glyphs::One(s)
    }
}

impl From<char> for Glyphs {
    fn from(c: char) -> Self {
        Glyphs::One(c.to_string())
    }
}

impl<T: Into<Glyphs>> From<Option<T>> for Glyphs {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Glyphs::Absent)
    }
}

impl From<Vec<String>> for Glyphs {
    fn from(items: Vec<String>) -> Self {
        Glyphs::Many(items)
    }
}

impl From<Vec<&str>> for Glyphs {
    fn from(items: Vec<&str>) -> Self {
        Glyphs::Many(items.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Glyphs {
    fn from(items: [&str; N]) -> Self {
        Glyphs::Many(items.iter().map(|s| s.to_string()).collect())
    }
}

/// Cell padding as written by a caller or a configuration file.
///
/// Padding counts blanks inserted left and right of every cell, independent
/// of alignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Padding {
    /// Same padding on both sides.
    Uniform(usize),
    /// `[left, right]`, or a single value to broadcast.
    Sides(Vec<usize>),
}

impl Padding {
    /// Normalize to `[left, right]`.
    pub fn normalize(&self) -> Result<[usize; 2]> {
        match self {
            Padding::Uniform(n) => Ok([*n, *n]),
            Padding::Sides(sides) => match sides.as_slice() {
                [n] => Ok([*n, *n]),
                [left, right] => Ok([*left, *right]),
                _ => Err(TableError::field(
                    "cell_pad",
                    sides,
                    "is not a sequence len 1 or 2",
                )),
            },
        }
    }
}

impl From<usize> for Padding {
    fn from(n: usize) -> Self {
        Padding::Uniform(n)
    }
}

/// `None` means no padding at all.
impl From<Option<usize>> for Padding {
    fn from(n: Option<usize>) -> Self {
        Padding::Uniform(n.unwrap_or(0))
    }
}

impl From<[usize; 2]> for Padding {
    fn from([left, right]: [usize; 2]) -> Self {
        Padding::Sides(vec![left, right])
    }
}

impl From<Vec<usize>> for Padding {
    fn from(sides: Vec<usize>) -> Self {
        Padding::Sides(sides)
    }
}

/// Parse a fill character given as a string; it must be exactly one char.
pub(crate) fn single_char(field: &'static str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TableError::field(field, value, "must be a single character")),
    }
}
