//! Summary command implementation

use std::path::Path;

use anyhow::Result;
use tally_core::{read_source, summarize};
use tracing::warn;

use super::group_digits;

/// Print totals and rankings computed from the source log alone.
pub fn cmd_summary(file: &Path, reference_total: Option<i64>) -> Result<()> {
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

    let summary = summarize(&text);

    println!("Total entries found: {}", summary.entries.len());
    println!(
        "2020 GROUPS total: {}",
        group_digits(summary.groups_2020_total)
    );
    println!("All GROUPS total: {}", group_digits(summary.groups_total));
    println!("Grand total from source: {}", group_digits(summary.total));
    if let Some(reference_total) = reference_total {
        println!("Database total: {}", group_digits(reference_total));
        println!(
            "Difference: {}",
            group_digits(summary.total - reference_total)
        );
    }

    println!();
    println!("First 10 entries:");
    for entry in summary.first_entries(10) {
        println!(
            "{} {}: {}",
            entry.date,
            entry.location,
            group_digits(entry.count)
        );
    }

    println!();
    println!("Largest 10 entries:");
    for entry in summary.top_entries(10) {
        println!(
            "{} {}: {}",
            entry.date,
            entry.location,
            group_digits(entry.count)
        );
    }

    Ok(())
}
