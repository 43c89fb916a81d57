#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// PPP correction service, resolved from the broadcasting station identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PppService {
    /// Galileo HAS
    Galileo,
    /// BDS B2b
    BeiDou,
    /// QZSS CLAS / MADOCA
    Qzss,
    /// RxNetworks assisted service
    Rxn,
    /// Unknown station
    #[default]
    NoValue,
}

impl PppService {
    /// Resolves the correction service from the station identifier
    /// broadcast in the status record. Unknown stations resolve to
    /// [PppService::NoValue].
    pub fn from_station_id(station_id: i32) -> Self {
        match station_id {
            9901 => Self::Galileo,
            9959 | 9960 | 9961 => Self::BeiDou,
            9934 | 9936 | 9939 => Self::Qzss,
            _ => Self::NoValue,
        }
    }
}

impl std::fmt::Display for PppService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Galileo => write!(f, "GALILEO"),
            Self::BeiDou => write!(f, "BEIDOU"),
            Self::Qzss => write!(f, "QZSS"),
            Self::Rxn => write!(f, "RXN"),
            Self::NoValue => write!(f, "NO_VALUE"),
        }
    }
}
