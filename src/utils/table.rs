//! Two-column label/value rendering for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub rows: Vec<(String, String)>,
}

impl Table {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push((label.into(), value.into()));
    }

    /// Labels are padded on display width so values line up.
    pub fn render(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(|(l, _)| UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for (label, value) in &self.rows {
            let pad = width - UnicodeWidthStr::width(label.as_str());
            out.push_str(&format!("{}{} : {}\n", label, " ".repeat(pad), value));
        }
        out
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
