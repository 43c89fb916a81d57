use crate::{error::Error, token::normalize_token};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position or velocity fix type, shared by both fields of the status record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PositionVelocityType {
    /// No fix
    None,
    /// Position fixed by configuration
    FixedPos,
    /// Height fixed by configuration
    FixedHeight,
    DopplerVelocity,
    /// Standalone (single point) fix
    Single,
    /// Pseudorange differential
    PsrDiff,
    Sbas,
    L1Float,
    IonoFreeFloat,
    NarrowFloat,
    L1Int,
    WideInt,
    NarrowInt,
    Ins,
    InsPsrSp,
    InsPsrDiff,
    InsRtkFloat,
    InsRtkFixed,
    /// PPP corrections applied, solution still converging
    PppConverging,
    /// Converged PPP fix
    Ppp,
    /// Nothing observed yet, or unrecognized token
    #[default]
    NoValue,
}

impl PositionVelocityType {
    /// Lenient decoder, see [SolutionStatus::parse](crate::prelude::SolutionStatus::parse).
    pub fn parse(text: &str) -> Self {
        match normalize_token(text).as_str() {
            "NONE" => Self::None,
            "FIXEDPOS" => Self::FixedPos,
            "FIXEDHEIGHT" => Self::FixedHeight,
            "DOPPLER_VELOCITY" => Self::DopplerVelocity,
            "SINGLE" => Self::Single,
            "PSRDIFF" => Self::PsrDiff,
            "SBAS" => Self::Sbas,
            "L1_FLOAT" => Self::L1Float,
            "IONOFREE_FLOAT" => Self::IonoFreeFloat,
            "NARROW_FLOAT" => Self::NarrowFloat,
            "L1_INT" => Self::L1Int,
            "WIDE_INT" => Self::WideInt,
            "NARROW_INT" => Self::NarrowInt,
            "INS" => Self::Ins,
            "INS_PSRSP" => Self::InsPsrSp,
            "INS_PSRDIFF" => Self::InsPsrDiff,
            "INS_RTKFLOAT" => Self::InsRtkFloat,
            "INS_RTKFIXED" => Self::InsRtkFixed,
            "PPP_CONVERGING" => Self::PppConverging,
            "PPP" => Self::Ppp,
            _ => Self::NoValue,
        }
    }
}

impl std::str::FromStr for PositionVelocityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::parse(s) {
            Self::NoValue => Err(Error::UnknownPositionVelocityType),
            pos_type => Ok(pos_type),
        }
    }
}

impl std::fmt::Display for PositionVelocityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
            Self::FixedPos => write!(f, "FIXEDPOS"),
            Self::FixedHeight => write!(f, "FIXEDHEIGHT"),
            Self::DopplerVelocity => write!(f, "DOPPLER_VELOCITY"),
            Self::Single => write!(f, "SINGLE"),
            Self::PsrDiff => write!(f, "PSRDIFF"),
            Self::Sbas => write!(f, "SBAS"),
            Self::L1Float => write!(f, "L1_FLOAT"),
            Self::IonoFreeFloat => write!(f, "IONOFREE_FLOAT"),
            Self::NarrowFloat => write!(f, "NARROW_FLOAT"),
            Self::L1Int => write!(f, "L1_INT"),
            Self::WideInt => write!(f, "WIDE_INT"),
            Self::NarrowInt => write!(f, "NARROW_INT"),
            Self::Ins => write!(f, "INS"),
            Self::InsPsrSp => write!(f, "INS_PSRSP"),
            Self::InsPsrDiff => write!(f, "INS_PSRDIFF"),
            Self::InsRtkFloat => write!(f, "INS_RTKFLOAT"),
            Self::InsRtkFixed => write!(f, "INS_RTKFIXED"),
            Self::PppConverging => write!(f, "PPP_CONVERGING"),
            Self::Ppp => write!(f, "PPP"),
            Self::NoValue => write!(f, "NO_VALUE"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::PositionVelocityType;
    use crate::error::Error;
    use std::str::FromStr;

    const VARIANTS: &[PositionVelocityType] = &[
        PositionVelocityType::None,
        PositionVelocityType::FixedPos,
        PositionVelocityType::FixedHeight,
        PositionVelocityType::DopplerVelocity,
        PositionVelocityType::Single,
        PositionVelocityType::PsrDiff,
        PositionVelocityType::Sbas,
        PositionVelocityType::L1Float,
        PositionVelocityType::IonoFreeFloat,
        PositionVelocityType::NarrowFloat,
        PositionVelocityType::L1Int,
        PositionVelocityType::WideInt,
        PositionVelocityType::NarrowInt,
        PositionVelocityType::Ins,
        PositionVelocityType::InsPsrSp,
        PositionVelocityType::InsPsrDiff,
        PositionVelocityType::InsRtkFloat,
        PositionVelocityType::InsRtkFixed,
        PositionVelocityType::PppConverging,
        PositionVelocityType::Ppp,
    ];

    #[test]
    fn roundtrip_all_variants() {
        for &pos_type in VARIANTS {
            assert_eq!(
                PositionVelocityType::parse(&pos_type.to_string()),
                pos_type,
                "{} did not round trip",
                pos_type,
            );
        }
    }

    #[test]
    fn ppp_is_not_a_prefix_match() {
        assert_eq!(
            PositionVelocityType::parse("PPP_CONVERGING"),
            PositionVelocityType::PppConverging,
        );
        assert_eq!(
            PositionVelocityType::parse("3;ppp"),
            PositionVelocityType::Ppp,
        );
    }

    #[test]
    fn unmatched_text_is_no_value() {
        assert_eq!(
            PositionVelocityType::parse("RTK"),
            PositionVelocityType::NoValue,
        );
        assert_eq!(
            PositionVelocityType::from_str("RTK"),
            Err(Error::UnknownPositionVelocityType),
        );
    }
}
