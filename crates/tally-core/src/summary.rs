//! Summary aggregation over the raw source text
//!
//! Computes the historical summary report: grand total, GROUPS totals,
//! and the first/largest entry listings. This pipeline deliberately uses
//! a coarser per-line heuristic than `extract`: no next-line lookahead,
//! no parenthetical stripping, no vocabulary mapping, and a raw
//! case-sensitive `GROUPS` test. The two heuristics must stay separate -
//! unifying them would change the historical report output.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::SummaryEntry;

/// Immutable result of a single pass over the source text.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SourceSummary {
    /// Every parsed entry, in document order.
    pub entries: Vec<SummaryEntry>,
    /// Sum of all counts.
    pub total: i64,
    /// Sum of counts whose raw location contains `GROUPS`.
    pub groups_total: i64,
    /// Sum of `GROUPS` counts whose raw date token ends in `/2020`.
    pub groups_2020_total: i64,
}

impl SourceSummary {
    /// The first `n` entries in document order.
    pub fn first_entries(&self, n: usize) -> &[SummaryEntry] {
        &self.entries[..self.entries.len().min(n)]
    }

    /// The `n` largest entries by count, descending. The sort is stable:
    /// entries with equal counts keep their document order.
    pub fn top_entries(&self, n: usize) -> Vec<&SummaryEntry> {
        let mut ranked: Vec<&SummaryEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}

fn date_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\d{1,2}/\d{1,2}/\d{4}").expect("valid regex"))
}

/// Fold the source text into a summary.
pub fn summarize(text: &str) -> SourceSummary {
    text.lines()
        .filter_map(parse_line)
        .fold(SourceSummary::default(), |mut summary, entry| {
            summary.total += entry.count;
            if entry.location.contains("GROUPS") {
                summary.groups_total += entry.count;
                if entry.date.ends_with("/2020") {
                    summary.groups_2020_total += entry.count;
                }
            }
            summary.entries.push(entry);
            summary
        })
}

/// Coarse line heuristic: a leading date token, at least one middle token
/// as the location, and a final token that parses as an integer once
/// commas are stripped.
fn parse_line(line: &str) -> Option<SummaryEntry> {
    if !date_prefix_re().is_match(line) {
        return None;
    }
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return None;
    }
    let count: i64 = parts[parts.len() - 1].replace(',', "").parse().ok()?;
    Some(SummaryEntry {
        date: parts[0].to_string(),
        location: parts[1..parts.len() - 1].join(" "),
        count,
    })
}
