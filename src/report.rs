//! Failure message rendering

use crate::options::DEFAULT_MAX_REPORT_LENGTH;

/// Builds the message shown when an assertion fails
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    method: String,
    description: String,
    difference: String,
    options: String,
    expected: String,
    actual: String,
    max_length: usize,
}

impl ReportBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            description: String::new(),
            difference: String::new(),
            options: String::new(),
            expected: String::new(),
            actual: String::new(),
            max_length: DEFAULT_MAX_REPORT_LENGTH,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn difference(mut self, difference: impl ToString) -> Self {
        self.difference = difference.to_string();
        self
    }

    pub fn options(mut self, summary: impl Into<String>) -> Self {
        self.options = summary.into();
        self
    }

    pub fn expected(mut self, text: impl Into<String>) -> Self {
        self.expected = text.into();
        self
    }

    pub fn actual(mut self, text: impl Into<String>) -> Self {
        self.actual = text.into();
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn build(&self) -> String {
        let mut lines = vec![format!("assertdiff: {} failed", self.method)];
        if !self.description.is_empty() {
            lines.push(format!("├─ Description: {}", self.description));
        }
        lines.push(format!("├─ Difference: {}", self.difference));
        lines.push(format!("├─ Options: {}", self.options));
        lines.push("├─ Expected:".to_string());
        push_indented(&mut lines, "│  ", &truncate(&self.expected, self.max_length));
        lines.push("└─ Actual:".to_string());
        push_indented(&mut lines, "   ", &truncate(&self.actual, self.max_length));
        lines.join("\n")
    }
}

fn push_indented(lines: &mut Vec<String>, prefix: &str, text: &str) {
    for line in text.lines() {
        lines.push(format!("{}{}", prefix, line));
    }
    if text.is_empty() {
        lines.push(format!("{}(empty)", prefix));
    }
}

/// Cut `text` to at most `max_chars` characters, noting how much was dropped
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => {
            let remaining = text[cut..].chars().count();
            format!("{}…(truncated, {} more chars)", &text[..cut], remaining)
        }
    }
}
