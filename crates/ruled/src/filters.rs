//! MiniJinja integration.
//!
//! [`register_table_filters`] adds a `table` filter that renders a list of
//! rows in place:
//!
//! ```jinja
//! {{ rows | table(border="light", align="l,r*") }}
//! ```
//!
//! ## Arguments
//!
//! All arguments are keyword arguments and optional:
//!
//! - `border`: name of a built-in [`crate::BorderStyle`]
//! - `template`: a 7×7 template, wins over `border`
//! - `align`: alignment descriptor, `"both"` or `"header,body"`
//! - `cell_pad`: blanks on both sides of every cell
//! - `pad_char`: single character that fills alignment slack
//! - `indent`: prefix for every line

use minijinja::value::Kwargs;
use minijinja::{Environment, Error, ErrorKind, Value};

use crate::error::TableError;
use crate::glyphs::single_char;
use crate::style::TableStyle;
use crate::table::format_table;

/// Register the `table` filter on a MiniJinja environment.
///
/// # Example
///
/// ```rust
/// use minijinja::{context, Environment};
/// use ruled::filters::register_table_filters;
///
/// let mut env = Environment::new();
/// register_table_filters(&mut env);
/// let out = env
///     .render_str("{{ rows | table(border='ascii') }}", context!(rows => vec![vec!["a", "1"]]))
///     .unwrap();
/// assert_eq!(out, "+---+---+\n| a | 1 |\n+---+---+");
/// ```
pub fn register_table_filters(env: &mut Environment<'_>) {
    env.add_filter("table", table_filter);
}

fn table_filter(rows: Value, kwargs: Kwargs) -> Result<String, Error> {
    let mut builder = TableStyle::builder();
    if let Some(border) = kwargs.get::<Option<String>>("border")? {
        builder = builder.border_style(border.parse().map_err(render_error)?);
    }
    if let Some(template) = kwargs.get::<Option<String>>("template")? {
        builder = builder.template(template);
    }
    if let Some(align) = kwargs.get::<Option<String>>("align")? {
        builder = builder.align(align);
    }
    if let Some(cell_pad) = kwargs.get::<Option<usize>>("cell_pad")? {
        builder = builder.cell_pad(cell_pad);
    }
    if let Some(pad_char) = kwargs.get::<Option<String>>("pad_char")? {
        builder = builder.pad_char(single_char("pad_char", &pad_char).map_err(render_error)?);
    }
    if let Some(indent) = kwargs.get::<Option<String>>("indent")? {
        builder = builder.indent(indent);
    }
    kwargs.assert_all_used()?;

    if rows.is_undefined() || rows.is_none() {
        return Ok(String::new());
    }

    let style = builder.build().map_err(render_error)?;
    let grid = collect_rows(&rows)?;
    format_table(grid, &style).map_err(render_error)
}

/// Turn a sequence of sequences into strings. A row that is a plain string
/// becomes a single cell rather than one cell per character.
fn collect_rows(rows: &Value) -> Result<Vec<Vec<String>>, Error> {
    let mut grid = Vec::new();
    for row in rows.try_iter()? {
        if row.as_str().is_some() {
            grid.push(vec![row.to_string()]);
            continue;
        }
        let cells = row.try_iter()?.map(|cell| cell_text(&cell)).collect();
        grid.push(cells);
    }
    Ok(grid)
}

fn cell_text(cell: &Value) -> String {
    if cell.is_none() || cell.is_undefined() {
        String::new()
    } else {
        cell.to_string()
    }
}

fn render_error(err: TableError) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    fn setup_env() -> Environment<'static> {
        let mut env = Environment::new();
        register_table_filters(&mut env);
        env
    }

    fn render(source: &str, rows: Value) -> Result<String, Error> {
        setup_env().render_str(source, context!(rows => rows))
    }

    #[test]
    fn filter_table_default_style() {
        let rows = Value::from_serialize(vec![vec!["name", "n"], vec!["x", "12"]]);
        let out = render("{{ rows | table }}", rows).unwrap();
        assert_eq!(out, " name  n\n x     12");
    }

    #[test]
    fn filter_table_border_and_align() {
        let rows = Value::from_serialize(vec![vec!["*", "10"], vec!["4", "40"]]);
        let out = render("{{ rows | table(border='ascii', align='r*') }}", rows).unwrap();
        assert_eq!(out, "+---+----+\n| * | 10 |\n+---+----+\n| 4 | 40 |\n+---+----+");
    }

    #[test]
    fn filter_table_numbers_and_none() {
        let rows = Value::from_serialize(vec![
            vec![Some(1), None],
            vec![Some(100), Some(2)],
        ]);
        let out = render("{{ rows | table(cell_pad=0, pad_char='.', indent='> ') }}", rows)
            .unwrap();
        assert_eq!(out, "> ..1.\n> 1002");
    }

    #[test]
    fn filter_table_undefined_renders_nothing() {
        let out = setup_env()
            .render_str("[{{ missing | table }}]", context!())
            .unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn filter_table_rejects_unknown_border() {
        let rows = Value::from_serialize(vec![vec!["a"]]);
        let err = render("{{ rows | table(border='fancy') }}", rows).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
        assert!(err.to_string().contains("fancy"));
    }

    #[test]
    fn filter_table_rejects_unknown_kwarg() {
        let rows = Value::from_serialize(vec![vec!["a"]]);
        assert!(render("{{ rows | table(colour='red') }}", rows).is_err());
    }

    #[test]
    fn filter_table_template_kwarg() {
        let rows = Value::from_serialize(vec![vec!["a", "b"], vec!["c", "d"]]);
        let out = setup_env()
            .render_str(
                "{{ rows | table(template=t, cell_pad=0) }}",
                context!(rows => rows, t => "0000000\n0 | | 0\n0-+-+-0\n0 | | 0\n0000000\n0 | | 0\n0000000"),
            )
            .unwrap();
        assert_eq!(out, "a|b\n-+-\nc|d");
    }
}
