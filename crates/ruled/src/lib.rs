//! # Ruled - Template-Driven Text Tables
//!
//! `ruled` renders a grid of cells as a plain-text table. Borders,
//! separators and crossings are drawn from a 7×7 character template, so a
//! new look is a matter of drawing it rather than writing code.
//!
//! ## Core Concepts
//!
//! - [`Frame`]: the glyphs decoded from a template (see [`template`])
//! - [`BorderStyle`]: a set of ready-made templates
//! - [`TableStyle`]: frame plus padding, alignment and line handling, built
//!   with [`TableStyleBuilder`] or loaded from a [`StyleConfig`]
//! - [`Alignment`]: per-column alignment descriptors for header and body
//! - [`Table`]: measures a grid once and renders it
//!
//! ## Quick Start
//!
//! ```rust
//! use ruled::{BorderStyle, Table, TableStyle};
//!
//! let style = TableStyle::bordered(BorderStyle::Light)?;
//! let table = Table::new(style).with_data(vec![
//!     vec!["n", "sq"],
//!     vec!["2", "4"],
//!     vec!["10", "100"],
//! ]);
//!
//! assert_eq!(
//!     table.format()?,
//!     "┌────┬─────┐\n\
//!      │ n  │ sq  │\n\
//!      ├────┼─────┤\n\
//!      │  2 │   4 │\n\
//!      │ 10 │ 100 │\n\
//!      └────┴─────┘"
//! );
//! # Ok::<(), ruled::TableError>(())
//! ```
//!
//! Numbers are right aligned and everything else left aligned unless an
//! alignment descriptor says otherwise.
//!
//! ## Custom Templates
//!
//! ```rust
//! use ruled::TableStyle;
//!
//! let style = TableStyle::builder()
//!     .template(
//!         "
//! 0000000
//! 0 | | 0
//! 0=#=#=0
//! 0 | | 0
//! 0000000
//! 0 | | 0
//! 0000000
//! ",
//!     )
//!     .align("c,lr*")
//!     .build()?;
//!
//! let out = ruled::format_table(vec![vec!["key", "value"], vec!["a", "1"]], &style)?;
//! assert_eq!(out, " key | value\n=====#=======\n a   |     1");
//! # Ok::<(), ruled::TableError>(())
//! ```
//!
//! ## Templates in MiniJinja
//!
//! [`filters::register_table_filters`] adds a `table` filter to a MiniJinja
//! environment.

mod align;
mod border;
mod error;
pub mod filters;
mod glyphs;
mod measure;
mod style;
mod table;
pub mod template;

pub use align::{is_numeric, Align, AlignArg, AlignSpec, Alignment};
pub use border::BorderStyle;
pub use error::{Result, TableError};
pub use glyphs::{Glyphs, Padding};
pub use measure::{text_width, Measurement};
pub use style::{StyleConfig, TableStyle, TableStyleBuilder};
pub use table::{format_table, Table};
pub use template::Frame;
