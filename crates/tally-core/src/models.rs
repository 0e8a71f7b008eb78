//! Record types shared by the audit and summary pipelines

/// A single collection observation.
///
/// `(date, location, count)` is the entire identity and value of a record.
/// Two records describe the same observation when `date` and `location`
/// match; a differing `count` is a mismatch, not a different observation.
///
/// Field order matters: the derived `Ord` sorts by
/// `(date, location, count)`, which is the order missing entries are
/// reported in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Record {
    /// Canonical `YYYY-MM-DD` date.
    pub date: String,
    /// Canonical site name (see `locations`).
    pub location: String,
    /// Sandwiches collected.
    pub count: u32,
}

impl Record {
    pub fn new(date: impl Into<String>, location: impl Into<String>, count: u32) -> Self {
        Record {
            date: date.into(),
            location: location.into(),
            count,
        }
    }
}

/// A source record whose `(date, location)` exists in the reference set
/// with a different count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub date: String,
    pub location: String,
    pub source_count: u32,
    pub reference_count: u32,
}

/// A line parsed by the coarse summary heuristic.
///
/// Unlike [`Record`], nothing here is normalized: `date` is the raw
/// `M/D/YYYY` token, `location` is the raw middle tokens rejoined with
/// single spaces, and `count` keeps the sign the trailing token carried.
/// The summary report has always been computed over raw text and changing
/// that would change its historical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub date: String,
    pub location: String,
    pub count: i64,
}
