//! CLI command implementations
//!
//! Commands are organized by pipeline:
//! - `audit` - Compare source-log records against the database
//! - `summary` - Totals and rankings from the source log alone

pub mod audit;
pub mod summary;

// Re-export command functions for main.rs
pub use audit::*;
pub use summary::*;

/// Format an integer with comma thousands separators
pub fn group_digits(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
