use crate::{error::Error, token::normalize_token};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geodetic datum the PPP solution is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DatumId {
    Wgs84,
    /// BDS B2b PPP service datum
    B2b,
    /// Nothing observed yet, or unrecognized token
    #[default]
    NoValue,
}

impl DatumId {
    /// Lenient decoder, see [SolutionStatus::parse](crate::prelude::SolutionStatus::parse).
    pub fn parse(text: &str) -> Self {
        match normalize_token(text).as_str() {
            "WGS84" => Self::Wgs84,
            "B2B" => Self::B2b,
            _ => Self::NoValue,
        }
    }
}

impl std::str::FromStr for DatumId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::parse(s) {
            Self::NoValue => Err(Error::UnknownDatum),
            datum => Ok(datum),
        }
    }
}

impl std::fmt::Display for DatumId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wgs84 => write!(f, "WGS84"),
            // mixed case on purpose, matches the receiver logs
            Self::B2b => write!(f, "B2b"),
            Self::NoValue => write!(f, "NO_VALUE"),
        }
    }
}
