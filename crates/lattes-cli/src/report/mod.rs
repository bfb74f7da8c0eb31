//! Plain-text reports shared by the console and the PDF sink

pub mod pdf;

use std::fmt;

/// Width of separator rules on the console
pub const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Text(String),
    /// Console separator; left out of the PDF
    Rule(char),
}

/// A titled list of lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    title: String,
    lines: Vec<ReportLine>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(ReportLine::Text(text.into()));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    pub fn rule(&mut self, ch: char) -> &mut Self {
        self.lines.push(ReportLine::Rule(ch));
        self
    }

    /// Text lines only, as drawn in the PDF
    pub fn text_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                ReportLine::Text(text) => Some(text.as_str()),
                ReportLine::Rule(_) => None,
            })
            .collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for line in &self.lines {
            match line {
                ReportLine::Text(text) => writeln!(f, "{text}")?,
                ReportLine::Rule(ch) => writeln!(f, "{}", ch.to_string().repeat(RULE_WIDTH))?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_rendering() {
        let mut report = Report::new("Título");
        report.rule('=').line("Arquivo: a.xml - Pontuação Total: 11").rule('-');

        let rendered = report.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Título");
        assert_eq!(lines[1], "=".repeat(50));
        assert_eq!(lines[2], "Arquivo: a.xml - Pontuação Total: 11");
        assert_eq!(lines[3], "-".repeat(50));
    }

    #[test]
    fn test_rules_are_not_text() {
        let mut report = Report::new("T");
        report.rule('=').line("um").blank().rule('-');
        assert_eq!(report.text_lines(), vec!["um", ""]);
    }
}
