//! Reference set loading
//!
//! The authoritative observations live in the collections database. The
//! loader shells out to `psql` with a fixed projection query and parses
//! the CSV it writes to stdout. Dates and location names arrive already
//! canonical, so no further normalization is applied on this side.

use std::collections::HashSet;
use std::process::Stdio;
use std::time::Duration;

use serde::Deserialize;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Record;

/// Fixed projection: one row per observation with the three group-count
/// fields already summed into a single total.
const QUERY: &str = "COPY (SELECT collection_date, host_name, \
     individual_sandwiches + COALESCE(group1_count, 0) + COALESCE(group2_count, 0) AS total \
     FROM sandwich_collections \
     ORDER BY collection_date, host_name) TO STDOUT WITH CSV HEADER;";

const QUERY_TIMEOUT_SECS: u64 = 30;

/// One row of the reference query's CSV output.
#[derive(Debug, Deserialize)]
struct ReferenceRow {
    collection_date: String,
    host_name: String,
    total: u32,
}

/// Loads the reference set of `(date, location, count)` observations.
pub struct ReferenceLoader {
    database_url: String,
}

impl ReferenceLoader {
    pub fn new(database_url: impl Into<String>) -> Self {
        ReferenceLoader {
            database_url: database_url.into(),
        }
    }

    /// Run the reference query and collect its rows into a set.
    ///
    /// Exact duplicate rows deduplicate implicitly; the query does not
    /// produce them in practice. Every failure mode - psql missing,
    /// non-zero exit, timeout, malformed CSV row - is an `Err`, and one
    /// malformed row discards the entire set. Callers that want the
    /// historical degrade-to-empty behavior handle the `Err` themselves.
    pub async fn load(&self) -> Result<HashSet<Record>> {
        let output = Command::new("psql")
            .arg("-d")
            .arg(&self.database_url)
            .arg("-c")
            .arg(QUERY)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the future on timeout must not leave psql running
            .kill_on_drop(true)
            .output();

        let output = match timeout(Duration::from_secs(QUERY_TIMEOUT_SECS), output).await {
            Ok(result) => result?,
            Err(_) => return Err(Error::QueryTimeout(QUERY_TIMEOUT_SECS)),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Query(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let entries = parse_reference_csv(&stdout)?;
        debug!("Loaded {} reference entries", entries.len());
        Ok(entries)
    }
}

/// Parse the header-plus-rows CSV the query writes to stdout.
fn parse_reference_csv(text: &str) -> Result<HashSet<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let mut entries = HashSet::new();
    for result in rdr.deserialize() {
        let row: ReferenceRow = result?;
        entries.insert(Record {
            date: row.collection_date,
            location: row.host_name,
            count: row.total,
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_csv() {
        let csv = "collection_date,host_name,total\n\
                   2020-08-14,Alpharetta,1234\n\
                   2020-08-14,Decatur,50\n";
        let entries = parse_reference_csv(csv).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.contains(&Record::new("2020-08-14", "Alpharetta", 1234)));
        assert!(entries.contains(&Record::new("2020-08-14", "Decatur", 50)));
    }

    #[test]
    fn test_exact_duplicate_rows_deduplicate() {
        let csv = "collection_date,host_name,total\n\
                   2020-08-14,Decatur,50\n\
                   2020-08-14,Decatur,50\n";
        let entries = parse_reference_csv(csv).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_header_only_is_empty() {
        let entries = parse_reference_csv("collection_date,host_name,total\n").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_malformed_row_fails_whole_load() {
        let csv = "collection_date,host_name,total\n\
                   2020-08-14,Alpharetta,1234\n\
                   2020-08-15,Decatur,not-a-number\n";
        assert!(parse_reference_csv(csv).is_err());
    }

    #[test]
    fn test_negative_total_fails_whole_load() {
        let csv = "collection_date,host_name,total\n\
                   2020-08-14,Alpharetta,-5\n";
        assert!(parse_reference_csv(csv).is_err());
    }
}
