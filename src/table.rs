//! ASCII box tables for console listings.
//!
//! ```text
//! +----+-------------+
//! | id | name        |
//! +----+-------------+
//! | 1  | Engineering |
//! +----+-------------+
//! ```

/// A row type that knows its column headers.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn from_rows<T: TableRow>(rows: &[T]) -> Self {
        let mut table = Self::new(T::HEADERS);
        for row in rows {
            table.push_row(row.cells());
        }
        table
    }

    /// Short rows are padded with empty cells; extra cells are dropped.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .map(|r| r[i].chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let border = widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+");
        let border = format!("+{border}+");

        let mut out = String::new();
        out.push_str(&border);
        out.push('\n');
        out.push_str(&render_line(&self.headers, &widths));
        out.push_str(&border);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&render_line(row, &widths));
        }
        if !self.rows.is_empty() {
            out.push_str(&border);
            out.push('\n');
        }
        out
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let body = cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, w)| format!(" {cell:<w$} "))
        .collect::<Vec<_>>()
        .join("|");
    format!("|{body}|\n")
}
