//! Crop-season enumeration.
//!
//! The Indian agricultural calendar has three cropping seasons; the
//! reference rainfall table and the trained classifier both use this closed
//! set. Anything outside it is a caller error, rejected before any lookup
//! is attempted.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of crop seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Monsoon sowing, June–October.
    Kharif,
    /// Winter sowing, November–March.
    Rabi,
    /// Summer sowing, March–June.
    Zaid,
}

impl Season {
    /// Canonical lowercase name, as used by the classifier's category
    /// encoding and the rainfall table's column naming.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "kharif",
            Season::Rabi => "rabi",
            Season::Zaid => "zaid",
        }
    }

    /// All seasons in declaration order.
    pub const ALL: [Season; 3] = [Season::Kharif, Season::Rabi, Season::Zaid];
}

impl FromStr for Season {
    type Err = CoreError;

    /// Case-insensitive parse. Leading/trailing whitespace is tolerated;
    /// any other value is [`CoreError::InvalidSeason`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kharif" => Ok(Season::Kharif),
            "rabi" => Ok(Season::Rabi),
            "zaid" => Ok(Season::Zaid),
            _ => Err(CoreError::InvalidSeason(s.to_string())),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
