//! Reconciliation of source records against the reference set

use std::collections::HashSet;

use crate::models::{Mismatch, Record};

/// Outcome of comparing the extracted sequence against the reference set.
#[derive(Debug, Default)]
pub struct Reconciliation {
    /// Source records with no `(date, location)` counterpart in the
    /// reference set, sorted by `(date, location, count)`.
    pub missing: Vec<Record>,
    /// Source records whose `(date, location)` exists with a different
    /// count, in scan order. One report per matching reference entry,
    /// never deduplicated.
    pub mismatches: Vec<Mismatch>,
}

/// Classify each source record as exact-match, mismatch, or missing.
///
/// Exact-triple membership is tested first; on a miss the reference set
/// is scanned linearly for entries sharing `(date, location)`. The linear
/// scan is a simplicity trade-off - the reference set is a few thousand
/// entries and this is not a hot path.
pub fn reconcile(source: &[Record], reference: &HashSet<Record>) -> Reconciliation {
    let mut result = Reconciliation::default();

    for record in source {
        if reference.contains(record) {
            continue;
        }

        let mut found_date_location = false;
        for entry in reference {
            if entry.date == record.date && entry.location == record.location {
                found_date_location = true;
                result.mismatches.push(Mismatch {
                    date: record.date.clone(),
                    location: record.location.clone(),
                    source_count: record.count,
                    reference_count: entry.count,
                });
            }
        }

        if !found_date_location {
            result.missing.push(record.clone());
        }
    }

    result.missing.sort();
    result
}
