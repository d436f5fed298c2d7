//! Column-aligned table rendering for `vup ls`.

/// A borderless table with left-aligned, padded columns.
///
/// Output is meant to be read by people and grepped by scripts, so rows
/// are plain text with no box drawing and no trailing whitespace.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| h.chars().count()).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row: Vec<String> = row.iter().map(|s| s.to_string()).collect();

        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(cell.chars().count());
            }
        }

        self.rows.push(row);
    }

    /// Render the header and every row as lines.
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(&self.headers)
            .chain(&self.rows)
            .map(|row| self.render_row(row))
            .collect()
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::new();

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            if i > 0 {
                s.push_str("  ");
            }
            s.push_str(cell);
            let pad = width.saturating_sub(cell.chars().count());
            s.push_str(&" ".repeat(pad));
        }

        s.trim_end().to_string()
    }
}
