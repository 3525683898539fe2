//! Region codes a series can be requested for

use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const STATE_CODES: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA", "KS",
    "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY",
    "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV",
    "WI", "WY",
];

/// The whole country or a single state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Region(String);

impl Region {
    /// The national aggregate
    pub fn national() -> Self {
        Region("US".to_string())
    }

    /// Whether this is the national aggregate rather than a state
    pub fn is_national(&self) -> bool {
        self.0 == "US"
    }

    /// Upper-case two letter code
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::national()
    }
}

impl FromStr for Region {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_uppercase();
        if code == "US" || STATE_CODES.contains(&code.as_str()) {
            Ok(Region(code))
        } else {
            Err(ChartError::InvalidParameter(format!(
                "Unknown region {:?}, expected US or a two letter state code",
                s
            )))
        }
    }
}

impl TryFrom<String> for Region {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
