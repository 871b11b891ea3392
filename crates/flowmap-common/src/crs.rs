//! EPSG identifiers for coordinate reference systems.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::GridError;

/// Numeric EPSG identifier of a coordinate reference system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpsgCode(pub u32);

impl EpsgCode {
    /// WGS84 Geographic (lon/lat in degrees)
    pub const WGS84: EpsgCode = EpsgCode(4326);
    /// Web Mercator (meters)
    pub const WEB_MERCATOR: EpsgCode = EpsgCode(3857);
    /// Amersfoort / RD New (Dutch national grid)
    pub const RD_NEW: EpsgCode = EpsgCode(28992);

    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub const fn code(&self) -> u32 {
        self.0
    }

    /// Parse an identifier as written in requests and config files.
    ///
    /// Accepts formats like:
    /// - "EPSG:4326"
    /// - "epsg:3857"
    /// - "28992"
    /// - "CRS:84" (equivalent to EPSG:4326)
    /// - "EPSG:900913" (legacy alias of EPSG:3857)
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "CRS:84" => return Ok(Self::WGS84),
            "EPSG:900913" => return Ok(Self::WEB_MERCATOR),
            _ => {}
        }

        let digits = normalized.strip_prefix("EPSG:").unwrap_or(&normalized);
        digits
            .parse::<u32>()
            .map(EpsgCode)
            .map_err(|_| GridError::InvalidEpsg(s.to_string()))
    }
}

impl FromStr for EpsgCode {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u32> for EpsgCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

// Negative codes are never assigned; they map to the invalid code 0.
impl From<i32> for EpsgCode {
    fn from(code: i32) -> Self {
        Self(u32::try_from(code).unwrap_or(0))
    }
}

impl fmt::Display for EpsgCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}
