//! Property-based tests for the renderer using proptest.

use proptest::prelude::*;
use ruled::{is_numeric, text_width, BorderStyle, Table, TableStyle, TableStyleBuilder};

// ============================================================================
// Strategies
// ============================================================================

fn cell_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9é]{0,6}"
}

fn grid_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(cell_strategy(), 1..5), 1..8)
}

fn ascii() -> TableStyle {
    TableStyle::bordered(BorderStyle::Ascii).unwrap()
}

const GLYPHS: &[&str] = &["-", "=", "+", "|", "#", " ", "│", "╋"];

/// `None` keeps the border style's glyph, `Some(None)` removes it.
type Override = Option<Option<&'static str>>;

fn glyph_override() -> impl Strategy<Value = Override> {
    prop::option::of(prop::option::of(prop::sample::select(GLYPHS)))
}

fn apply(
    builder: TableStyleBuilder,
    glyph: Override,
    set: fn(TableStyleBuilder, Option<&'static str>) -> TableStyleBuilder,
) -> TableStyleBuilder {
    match glyph {
        Some(glyph) => set(builder, glyph),
        None => builder,
    }
}

/// A named style with glyph fields overridden in the order corners, borders,
/// column separators, row separators, then top, left, right, bottom, header
/// and body crossings.
fn overridden(border: BorderStyle, overrides: [Override; 10], cell_pad: usize) -> TableStyle {
    let [corners, borders, column_seps, row_seps, top, left, right, bottom, header, body] =
        overrides;
    let mut builder = TableStyle::builder()
        .border_style(border)
        .cell_pad(cell_pad)
        .strip_trailing(false);
    builder = apply(builder, corners, |b, g| b.corners(g));
    builder = apply(builder, borders, |b, g| b.borders(g));
    builder = apply(builder, column_seps, |b, g| b.column_seps(g));
    builder = apply(builder, row_seps, |b, g| b.row_seps(g));
    builder = apply(builder, top, |b, g| b.top_cross(g));
    builder = apply(builder, left, |b, g| b.left_cross(g));
    builder = apply(builder, right, |b, g| b.right_cross(g));
    builder = apply(builder, bottom, |b, g| b.bottom_cross(g));
    builder = apply(builder, header, |b, g| b.header_cross(g));
    builder = apply(builder, body, |b, g| b.body_cross(g));
    builder.build().unwrap()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Formatting twice gives the same text.
    #[test]
    fn format_is_idempotent(grid in grid_strategy()) {
        let table = Table::new(ascii()).with_data(grid);
        prop_assert_eq!(table.format().unwrap(), table.format().unwrap());
    }

    /// With a closed border every line has the same width.
    #[test]
    fn bordered_lines_have_equal_width(grid in grid_strategy()) {
        let out = Table::new(ascii()).with_data(grid).format().unwrap();
        let widths: Vec<usize> = out.lines().map(text_width).collect();
        prop_assert!(widths.windows(2).all(|w| w[0] == w[1]), "{}", out);
    }

    /// Every line has the same width whichever glyphs are present or absent.
    #[test]
    fn lines_line_up_under_glyph_overrides(
        grid in grid_strategy(),
        border in prop::sample::select(BorderStyle::ALL.to_vec()),
        overrides in prop::array::uniform10(glyph_override()),
        cell_pad in 0usize..3,
    ) {
        let table = Table::new(overridden(border, overrides, cell_pad)).with_data(grid);
        let out = table.format().unwrap();
        let widths: Vec<usize> = out.lines().map(text_width).collect();
        prop_assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}\n{}", widths, out);
    }

    /// Short rows still get a cell for every column.
    #[test]
    fn ragged_rows_render_every_column(grid in grid_strategy()) {
        let columns = grid.iter().map(Vec::len).max().unwrap_or(0);
        let rows = grid.len();
        let out = Table::new(ascii()).with_data(grid).format().unwrap();
        let row_lines: Vec<&str> = out.lines().filter(|l| l.starts_with('|')).collect();
        prop_assert_eq!(row_lines.len(), rows);
        for line in row_lines {
            prop_assert_eq!(line.matches('|').count(), columns + 1);
        }
    }

    /// Every column is as wide as its widest cell plus the padding.
    #[test]
    fn rule_spans_widest_cells(grid in grid_strategy()) {
        let table = Table::new(ascii()).with_data(grid);
        let out = table.format().unwrap();
        let top = out.lines().next().unwrap();
        let spans: Vec<usize> = top.trim_matches('+').split('+').map(text_width).collect();
        let expected: Vec<usize> = table.measurement().widths().iter().map(|w| w + 2).collect();
        prop_assert_eq!(spans, expected);
    }

    /// Integers are numeric.
    #[test]
    fn integers_are_numeric(n in any::<i64>()) {
        prop_assert!(is_numeric(&n.to_string()));
    }

    /// Finite decimals are numeric, with or without surrounding blanks.
    #[test]
    fn decimals_are_numeric(x in -1.0e6f64..1.0e6) {
        prop_assert!(is_numeric(&x.to_string()));
        let padded = format!("  {}  ", x);
        prop_assert!(is_numeric(&padded));
    }

    /// Words are never numeric.
    #[test]
    fn words_are_not_numeric(word in "[a-df-z]{1,8}") {
        prop_assert!(!is_numeric(&word));
    }

    /// Numbers align right and words align left under the default style.
    #[test]
    fn automatic_alignment(n in 0u32..100_000, word in "[a-z]{1,3}") {
        let out = Table::new(TableStyle::default())
            .with_data(vec![vec!["x".repeat(8)], vec![n.to_string()], vec![word.clone()]])
            .format()
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        prop_assert!(lines[1].ends_with(&n.to_string()));
        prop_assert_eq!(text_width(lines[1]), 9);
        prop_assert_eq!(lines[2], format!(" {}", word));
    }
}
