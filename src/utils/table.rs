//! Plain-text table rendering for CLI outputs.
//! Widths are display columns, so wide characters in free-text cells keep rows aligned.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

/// Pad `cell` with spaces up to `width` display columns.
fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(cell)));
    match align {
        Align::Left => format!("{}{}", cell, fill),
        Align::Right => format!("{}{}", fill, cell),
    }
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

    /// Column widths fit the widest header or cell.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.push_line(&mut out, &headers, &widths);

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        self.push_line(&mut out, &rule, &widths);

        for row in &self.rows {
            self.push_line(&mut out, row, &widths);
        }

        out
    }

    fn push_line(&self, out: &mut String, cells: &[String], widths: &[usize]) {
        let line: Vec<String> = self
            .columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (col, width))| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                pad(cell, *width, col.align)
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Display column where `needle` starts in `line`.
    fn column_of(line: &str, needle: &str) -> usize {
        let byte = line.find(needle).unwrap();
        UnicodeWidthStr::width(&line[..byte])
    }

    #[test]
    fn wide_characters_keep_columns_aligned() {
        let mut table = Table::new(vec![Column::left("Reason"), Column::left("Day")]);
        table.add_row(vec!["休暇休暇".to_string(), "Fri".to_string()]);
        table.add_row(vec!["abcd".to_string(), "Mon".to_string()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(column_of(lines[2], "Fri"), 10);
        assert_eq!(column_of(lines[3], "Mon"), 10);
        assert_eq!(column_of(lines[0], "Day"), 10);
    }

    #[test]
    fn right_aligned_cells_end_together() {
        let mut table = Table::new(vec![Column::right("Worked")]);
        table.add_row(vec!["08h 30m".to_string()]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], " Worked");
        assert_eq!(lines[2], "08h 30m");
    }
}
