//! Sectioned text table for analysis results.
//!
//! Severity here grades how much a ciphertext leaks: `Fail` means a
//! statistic gives the cipher away.

/// Ordered from least to most revealing, so `max` picks the worst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Pass,
    Warn,
    Fail,
}

impl Severity {
    fn badge(self) -> &'static str {
        match self {
            Severity::Pass => "✔ PASS",
            Severity::Warn => "⚠ WARN",
            Severity::Fail => "✖ FAIL",
        }
    }

    fn verdict(self) -> &'static str {
        match self {
            Severity::Pass => "(no obvious weakness)",
            Severity::Warn => "(some structure visible)",
            Severity::Fail => "(statistics give the cipher away)",
        }
    }

    fn paint(self, text: &str) -> String {
        let code = match self {
            Severity::Pass => "\x1b[32m",
            Severity::Warn => "\x1b[33m",
            Severity::Fail => "\x1b[31m",
        };
        format!("{}{}{}", code, text, RESET)
    }
}

struct Metric {
    label: String,
    value: String,
    detail: String,
    severity: Severity,
}

/// A named group of metrics, built with chained `metric` calls.
pub struct Section {
    name: String,
    metrics: Vec<Metric>,
}

impl Section {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            metrics: Vec::new(),
        }
    }

    pub fn metric(
        mut self,
        label: &str,
        value: String,
        detail: impl Into<String>,
        severity: Severity,
    ) -> Self {
        self.metrics.push(Metric {
            label: label.to_string(),
            value,
            detail: detail.into(),
            severity,
        });
        self
    }

    fn severity(&self) -> Severity {
        self.metrics
            .iter()
            .map(|m| m.severity)
            .max()
            .unwrap_or(Severity::Pass)
    }
}

pub struct Dashboard {
    title: String,
    sections: Vec<Section>,
}

impl Dashboard {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    fn status(&self) -> Severity {
        self.sections
            .iter()
            .map(Section::severity)
            .max()
            .unwrap_or(Severity::Pass)
    }

    pub fn render(&self) -> String {
        const HEADERS: [&str; COLUMNS] = ["Section", "Metric", "Value", "Notes", "Status"];

        let rows: Vec<([&str; COLUMNS], Severity)> = self
            .sections
            .iter()
            .flat_map(|section| {
                section.metrics.iter().enumerate().map(move |(i, m)| {
                    let name = if i == 0 { section.name.as_str() } else { "" };
                    (
                        [
                            name,
                            m.label.as_str(),
                            m.value.as_str(),
                            m.detail.as_str(),
                            m.severity.badge(),
                        ],
                        m.severity,
                    )
                })
            })
            .collect();

        let mut widths = HEADERS.map(width);
        for (cells, _) in &rows {
            for (w, cell) in widths.iter_mut().zip(cells) {
                *w = (*w).max(width(cell));
            }
        }
        widths[NOTES] = widths[NOTES].min(NOTES_WIDTH);

        let status = self.status();
        let headline = format!("{} {} {}", status.badge(), self.title, status.verdict());
        let mut out = format!("{}{}\n\n", BOLD, status.paint(&headline));
        let separator = rule(&widths);
        out.push_str(&separator);
        out.push_str(&line(&HEADERS.map(String::from), &widths, None));
        out.push_str(&separator);

        for (cells, severity) in rows {
            let wrapped: [Vec<String>; COLUMNS] =
                std::array::from_fn(|c| wrap_cell(cells[c], widths[c]));
            let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);
            for i in 0..height {
                let row: [String; COLUMNS] =
                    std::array::from_fn(|c| wrapped[c].get(i).cloned().unwrap_or_default());
                out.push_str(&line(&row, &widths, Some(severity)));
            }
            out.push_str(&separator);
        }
        out
    }
}

const COLUMNS: usize = 5;
const NOTES: usize = 3;
const NOTES_WIDTH: usize = 48;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

fn width(text: &str) -> usize {
    text.chars().count()
}

fn rule(widths: &[usize; COLUMNS]) -> String {
    let dashes: Vec<String> = widths.iter().map(|&w| "-".repeat(w + 2)).collect();
    format!("+{}+\n", dashes.join("+"))
}

/// One table line. The status column is colored when a severity is given.
fn line(
    cells: &[String; COLUMNS],
    widths: &[usize; COLUMNS],
    severity: Option<Severity>,
) -> String {
    let mut out = String::from("|");
    for (col, (cell, &w)) in cells.iter().zip(widths).enumerate() {
        let padded = format!(" {:<w$} ", cell, w = w);
        match severity {
            Some(s) if col == COLUMNS - 1 => out.push_str(&s.paint(&padded)),
            _ => out.push_str(&padded),
        }
        out.push('|');
    }
    out.push('\n');
    out
}

/// Greedy word wrap. Words longer than `max` get a line of their own.
fn wrap_cell(text: &str, max: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(last) if width(last) + 1 + width(word) <= max => {
                last.push(' ');
                last.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
