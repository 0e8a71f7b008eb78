//! Tally Core Library
//!
//! Shared functionality for the tally collection-log audit tool:
//! - Source text extraction (date/location/count records)
//! - Location vocabulary mapping onto canonical site names
//! - Reference set loading from the collections database
//! - Reconciliation (missing-entry and mismatch classification)
//! - Summary aggregation (totals, groupings, rankings)

pub mod error;
pub mod extract;
pub mod locations;
pub mod models;
pub mod reconcile;
pub mod reference;
pub mod summary;

pub use error::{Error, Result};
pub use extract::{extract_records, read_source, Records};
pub use locations::canonical_location;
pub use models::{Mismatch, Record, SummaryEntry};
pub use reconcile::{reconcile, Reconciliation};
pub use reference::ReferenceLoader;
pub use summary::{summarize, SourceSummary};
