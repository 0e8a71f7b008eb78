//! Location vocabulary
//!
//! The source document refers to collection sites by abbreviations,
//! alternate casings, and historical names. This module maps those raw
//! variants onto the canonical display names the database uses.

/// Ordered `(uppercase pattern, canonical name)` pairs, checked in
/// declaration order with first match winning. A pattern matches when it
/// is a substring of the uppercased raw location text.
///
/// Order is load-bearing: `E COBB/ROSWELL` must be tried before falling
/// through, and `GROUPS` first so group rows never hit a site pattern.
const LOCATION_VOCABULARY: &[(&str, &str)] = &[
    ("GROUPS", "Groups"),
    ("ALPHARETTA", "Alpharetta"),
    ("DUNWOODY/PTC", "Dunwoody/PTC"),
    ("E COBB/ROSWELL", "East Cobb/Roswell"),
    ("EAST COBB/ROSWELL", "East Cobb/Roswell"),
    ("SANDY SPRINGS", "Sandy Springs"),
    ("INTOWN/DRUID HILLS", "Intown/Druid Hills"),
    ("P'TREE CORNERS", "Peachtree Corners"),
    ("PEACHTREE CORNERS", "Peachtree Corners"),
    ("FLOWERY BRANCH", "Flowery Branch"),
    ("DECATUR", "Decatur"),
    ("SNELLVILLE", "Snellville"),
    ("PREVIOUS OAK GROVE", "OG Sandwich Project"),
    ("PREVIOUS BUCKHEAD", "OG Sandwich Project"),
    ("COLLECTIVE LEARNING", "Collective Learning"),
    ("DACULA", "Dacula"),
];

/// Map a cleaned-up raw location onto its canonical name.
///
/// Unrecognized locations pass through unchanged - the source document
/// occasionally names sites the vocabulary has never seen, and keeping
/// the raw text makes those visible in the audit output instead of
/// erroring out.
pub fn canonical_location(raw: &str) -> String {
    let upper = raw.to_uppercase();
    for (pattern, canonical) in LOCATION_VOCABULARY {
        if upper.contains(pattern) {
            return (*canonical).to_string();
        }
    }
    raw.to_string()
}
