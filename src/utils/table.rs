//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured on the visible text: ANSI color codes are ignored
//! and wide characters count double.

use super::colors::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Upper bound for the column; longer cells are cut with "…".
    pub max_width: Option<usize>,
    pub right: bool,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            max_width: None,
            right: false,
        }
    }

    pub fn max(mut self, w: usize) -> Self {
        self.max_width = Some(w);
        self
    }

    pub fn right(mut self) -> Self {
        self.right = true;
        self
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Cut plain text to `max` display columns.
pub fn truncate(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut w = 0;
    for ch in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if w + cw + 1 > max {
            break;
        }
        out.push(ch);
        w += cw;
    }
    out.push('…');
    out
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn cell(&self, col: usize, raw: &str) -> String {
        match self.columns[col].max_width {
            // colored cells are short labels; only plain text gets cut
            Some(max) if strip_ansi(raw) == raw => truncate(raw, max),
            _ => raw.to_string(),
        }
    }

    pub fn render(&self) -> String {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| {
                (0..self.columns.len())
                    .map(|i| self.cell(i, r.get(i).map(String::as_str).unwrap_or("")))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| {
                cells
                    .iter()
                    .map(|r| visible_width(&r[i]))
                    .chain(std::iter::once(visible_width(&c.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&format!("\x1b[1m{}\x1b[0m", col.header), *w, false));
            out.push_str("  ");
        }
        out.push('\n');
        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len();
        out.push_str(&"─".repeat(total.saturating_sub(2)));
        out.push('\n');

        // Rows
        for row in &cells {
            for (i, w) in widths.iter().enumerate() {
                out.push_str(&pad(&row[i], *w, self.columns[i].right));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(visible_width(s)));
    if right {
        format!("{fill}{s}")
    } else {
        format!("{s}{fill}")
    }
}
