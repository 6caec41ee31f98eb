//! Measurement pass over a grid.

/// Display width of a cell: its length in characters.
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Row count and per-column maximum widths of a grid.
///
/// The column count is the length of the longest row; shorter rows simply
/// contribute nothing to the columns they lack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Measurement {
    rows: usize,
    widths: Vec<usize>,
}

impl Measurement {
    /// Measure a grid.
    ///
    /// ```rust
    /// use ruled::Measurement;
    ///
    /// let m = Measurement::of(&[vec!["a", "bcd"], vec!["ef"]]);
    /// assert_eq!(m.rows(), 2);
    /// assert_eq!(m.widths(), &[2, 3]);
    /// ```
    pub fn of<S: AsRef<str>>(grid: &[Vec<S>]) -> Self {
        let mut widths: Vec<usize> = Vec::new();
        for row in grid {
            if row.len() > widths.len() {
                widths.resize(row.len(), 0);
            }
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(text_width(cell.as_ref()));
            }
        }
        Measurement {
            rows: grid.len(),
            widths,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.widths.len()
    }

    /// Width for each column.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid() {
        let m = Measurement::of::<&str>(&[]);
        assert_eq!(m.rows(), 0);
        assert_eq!(m.columns(), 0);
    }

    #[test]
    fn ragged_rows() {
        let m = Measurement::of(&[vec!["ab", "c"], vec!["d", "efg", "h"], vec!["ijkl"]]);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.widths(), &[4, 3, 1]);
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        assert_eq!(text_width("∆x"), 2);
        assert_eq!(text_width("n²"), 2);
        assert_eq!(text_width(""), 0);
    }

    #[test]
    fn rows_of_empty_rows() {
        let m = Measurement::of::<&str>(&[vec![], vec![]]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.columns(), 0);
    }

    #[test]
    fn remeasuring_replaces_previous_result() {
        let wide = Measurement::of(&[vec!["wide cell", "x"]]);
        let narrow = Measurement::of(&[vec!["a"]]);
        assert_eq!(wide.widths(), &[9, 1]);
        assert_eq!(narrow.widths(), &[1]);
    }
}
