//! Geographic identifier normalization.
//!
//! Free-form place names arrive from three sources — user input,
//! reverse-geocoding results, and reference-table keys — with inconsistent
//! decoration: `"Pune (Rural) District"`, `"nashik"`, `"Bhopal Tehsil"`.
//! [`normalize`] reconciles them into one canonical form usable for
//! exact-match lookup.
//!
//! The pipeline is deterministic, pure and idempotent: reapplying it to an
//! already-canonical identifier changes nothing. Invalid or empty input
//! yields an empty canonical string, which never matches a stored key.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Trailing parenthetical qualifier, e.g. `"Pune (Rural)"`.
static PAREN_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*\(.*\)\s*$").expect("paren suffix regex"));

/// One trailing administrative-unit token from the closed set.
static ADMIN_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(tehsil|tahsil|taluka|mandal|district|subdivision)\s*$")
        .expect("admin suffix regex")
});

/// Canonical (district, state) pair used as the lookup key into the
/// reference tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeoIdentifier {
    pub district: String,
    pub state: String,
}

/// Normalize a raw (district, state) pair into its canonical form.
///
/// District: strip a trailing parenthetical group, then one trailing
/// administrative-unit token ({District, Tehsil, Tahsil, Taluka, Mandal,
/// Subdivision}, case-insensitive), then trim and title-case. State: trim
/// and title-case only. Interior runs of whitespace collapse to single
/// spaces.
///
/// ```
/// use krishi_core::geo::normalize;
///
/// let geo = normalize("Pune (Rural) District", "maharashtra");
/// assert_eq!(geo.district, "Pune");
/// assert_eq!(geo.state, "Maharashtra");
/// ```
pub fn normalize(raw_district: &str, raw_state: &str) -> GeoIdentifier {
    let district = PAREN_SUFFIX.replace(raw_district, "");
    let district = ADMIN_SUFFIX.replace(&district, "");
    // The qualifier can sit on either side of the unit token
    // ("Pune (Rural) District" vs "Indore Tehsil (Urban)"), so the
    // parenthetical strip runs again once the token is gone.
    let district = PAREN_SUFFIX.replace(&district, "");
    GeoIdentifier {
        district: title_case(&district),
        state: title_case(raw_state),
    }
}

/// First letter of each whitespace-separated word uppercased, the rest
/// lowercased. Trims and collapses whitespace as a side effect of the
/// word split. Public because response echoes use the same casing as the
/// canonical form without the suffix stripping.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
