use crate::{error::Error, token::normalize_token};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Solution convergence status reported on the PPP correction channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolutionStatus {
    /// Solution computed and usable
    SolComputed,
    /// Not enough observations to resolve
    InsufficientObs,
    /// Solution did not converge
    NoConvergence,
    /// Covariance trace exceeds the receiver limit
    CovTrace,
    /// Nothing observed yet, or unrecognized token
    #[default]
    NoValue,
}

impl SolutionStatus {
    /// Lenient decoder: normalizes the field (sequence prefix, case)
    /// then matches it against the receiver token set.
    /// Unrecognized text folds into [SolutionStatus::NoValue].
    pub fn parse(text: &str) -> Self {
        match normalize_token(text).as_str() {
            "SOL_COMPUTED" => Self::SolComputed,
            "INSUFFICIENT_OBS" => Self::InsufficientObs,
            "NO_CONVERGENCE" => Self::NoConvergence,
            "COV_TRACE" => Self::CovTrace,
            _ => Self::NoValue,
        }
    }
}

impl std::str::FromStr for SolutionStatus {
    type Err = Error;

    /// Strict decoder: unrecognized text is an error, not [SolutionStatus::NoValue].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::parse(s) {
            Self::NoValue => Err(Error::UnknownSolutionStatus),
            status => Ok(status),
        }
    }
}

impl std::fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SolComputed => write!(f, "SOL_COMPUTED"),
            Self::InsufficientObs => write!(f, "INSUFFICIENT_OBS"),
            Self::NoConvergence => write!(f, "NO_CONVERGENCE"),
            Self::CovTrace => write!(f, "COV_TRACE"),
            Self::NoValue => write!(f, "NO_VALUE"),
        }
    }
}
