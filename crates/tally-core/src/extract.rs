//! Source record extraction
//!
//! Parses the semi-structured collection-log export into normalized
//! `(date, location, count)` records. The export comes from a scanned PDF,
//! so the layout is loose: most entries fit on one line, but the count
//! sometimes wraps onto the following line, location text carries
//! parenthesized annotations, and a boilerplate footnote bleeds into some
//! rows.

use std::path::Path;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::locations::canonical_location;
use crate::models::Record;

/// Footnote sentence that bleeds into location text on some rows.
const FOOTNOTE: &str = "Numbers displayed only when not included in a host's count.";

/// Read the source export as text with lenient decoding.
///
/// The export is a scan, so invalid byte sequences are expected; they are
/// replaced rather than failing the read.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Lazy iterator over the records in a source document.
///
/// Re-creating the iterator over the same text re-derives the same
/// sequence. Duplicate `(date, location)` tuples are preserved in order -
/// the document genuinely reports multiple observations per day in
/// different sections.
pub struct Records<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    opener_re: Regex,
    trailing_count_re: Regex,
    count_line_re: Regex,
    paren_re: Regex,
}

impl<'a> Records<'a> {
    pub fn new(text: &'a str) -> Self {
        Records {
            lines: text.lines().collect(),
            pos: 0,
            opener_re: Regex::new(r"^(\d{1,2}/\d{1,2}/\d{4})\s+(.+)").expect("valid regex"),
            trailing_count_re: Regex::new(r"(\d{1,3}(?:,\d{3})*|\d+)$").expect("valid regex"),
            count_line_re: Regex::new(r"^(\d{1,3}(?:,\d{3})*|\d+)$").expect("valid regex"),
            paren_re: Regex::new(r"\s*\([^)]*\)\s*").expect("valid regex"),
        }
    }

    /// Strip annotations and the footnote from a raw location, then map
    /// it through the location vocabulary.
    fn normalize_location(&self, raw: &str) -> String {
        let cleaned = self.paren_re.replace_all(raw, "");
        let cleaned = cleaned.replace(FOOTNOTE, "");
        canonical_location(cleaned.trim())
    }
}

impl Iterator for Records<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos].trim();
            self.pos += 1;

            let caps = match self.opener_re.captures(line) {
                Some(caps) => caps,
                None => continue,
            };
            let date_token = caps.get(1).expect("opener group 1").as_str();
            let remainder = caps.get(2).expect("opener group 2").as_str().trim();

            // Count on the same line, anchored at the end of the remainder;
            // otherwise the count may have wrapped onto the next line.
            let (raw_location, count_token) = match self.trailing_count_re.find(remainder) {
                Some(m) => (remainder[..m.start()].trim(), m.as_str()),
                None => match self.lines.get(self.pos).map(|l| l.trim()) {
                    Some(next_line) if self.count_line_re.is_match(next_line) => {
                        // Consume the wrapped count line so it is never
                        // reprocessed as its own record.
                        self.pos += 1;
                        (remainder, next_line)
                    }
                    // No count anywhere: not a parseable record.
                    _ => continue,
                },
            };

            let count = match count_token.replace(',', "").parse::<u32>() {
                Ok(count) => count,
                Err(_) => continue,
            };

            // Invalid calendar dates (e.g. 2/30/2021) drop the record
            // silently rather than failing the whole run.
            let date = match NaiveDate::parse_from_str(date_token, "%m/%d/%Y") {
                Ok(date) => date.format("%Y-%m-%d").to_string(),
                Err(_) => continue,
            };

            let location = self.normalize_location(raw_location);
            return Some(Record {
                date,
                location,
                count,
            });
        }
        None
    }
}

/// Parse the full source text into an ordered record sequence.
pub fn extract_records(text: &str) -> Vec<Record> {
    let records: Vec<Record> = Records::new(text).collect();
    debug!("Extracted {} source records", records.len());
    records
}
