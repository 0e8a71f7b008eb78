//! Audit command implementation

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{extract_records, read_source, reconcile, ReferenceLoader};
use tracing::warn;

/// Compare the parsed source log against the database reference set.
///
/// External failures degrade rather than abort: an unreadable source file
/// becomes zero records and a failed reference query becomes an empty
/// set, so a full outage and a legitimately empty table look the same in
/// the report. Only missing configuration errors out.
pub async fn cmd_audit(file: &Path, database_url: Option<&str>) -> Result<()> {
    let database_url = database_url
        .map(str::to_string)
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .context("No database connection string. Pass --database-url or set DATABASE_URL")?;

    println!("Getting database entries...");
    let loader = ReferenceLoader::new(database_url);
    let reference = match loader.load().await {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Reference query failed, continuing with empty set: {}", e);
            HashSet::new()
        }
    };
    println!("Found {} database entries", reference.len());

    println!();
    println!("Parsing source file...");
    let text = match read_source(file) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                "Failed to read source file {}, continuing with no records: {}",
                file.display(),
                e
            );
            String::new()
        }
    };
    let source = extract_records(&text);
    println!("Found {} source entries", source.len());

    let result = reconcile(&source, &reference);

    for m in &result.mismatches {
        println!(
            "MISMATCH: {} {} - Source: {}, DB: {}",
            m.date, m.location, m.source_count, m.reference_count
        );
    }

    println!();
    println!("Found {} missing entries:", result.missing.len());
    for record in &result.missing {
        println!("{} | {} | {}", record.date, record.location, record.count);
    }

    Ok(())
}
