//! Line extraction: split raw dump lines into name and datetime fragments.

use regex::Regex;

/// Outcome of the boundary match for one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome<'a> {
    /// Text before the first date+time token (trimmed) and the token itself.
    Matched { name: &'a str, datetime: &'a str },
    /// Blank, or no date+time token found. Skipped lines never fail a batch.
    Skipped,
}

/// Locates the first `D{1,2}/D{1,2}/D{4} H{1,2}:M{2}[:S{2}] [AM|PM]` token
/// in a line, e.g. "danielrabaradomingo 10/01/2025 12:26:22 PM".
pub struct LineExtractor {
    boundary: Regex,
}

impl LineExtractor {
    pub fn new() -> Self {
        let boundary = Regex::new(
            r"(?i)^(.*?)\s+(\d{1,2}/\d{1,2}/\d{4}\s+\d{1,2}:\d{2}(?::\d{2})?\s*(?:AM|PM)?)",
        )
        .unwrap();
        Self { boundary }
    }

    pub fn split_line<'a>(&self, line: &'a str) -> LineOutcome<'a> {
        let line = line.trim();
        if line.is_empty() {
            return LineOutcome::Skipped;
        }

        match self.boundary.captures(line) {
            Some(caps) => {
                let name = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
                let datetime = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
                LineOutcome::Matched { name, datetime }
            }
            None => LineOutcome::Skipped,
        }
    }
}

impl Default for LineExtractor {
    fn default() -> Self {
        Self::new()
    }
}
