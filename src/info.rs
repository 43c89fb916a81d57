use crate::{
    coordinates::BAD_LATLON, datum::DatumId, postype::PositionVelocityType, service::PppService,
    status::SolutionStatus,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One decoded PPP correction status record.
///
/// The caller owns this value and threads it through its own session:
/// there is no shared or global instance. [PppInfo::default] is the
/// "nothing decoded yet" record, every field at its sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PppInfo {
    /// Convergence status of the reported solution
    pub solution_status: SolutionStatus,
    /// Position fix type
    pub position_type: PositionVelocityType,
    /// Velocity fix type
    pub velocity_type: PositionVelocityType,
    /// Datum the coordinates are expressed in
    pub datum: DatumId,
    /// Fixed point latitude, degrees times 1E7, [BAD_LATLON] when unset
    pub latitude: i32,
    /// Fixed point longitude, degrees times 1E7, [BAD_LATLON] when unset
    pub longitude: i32,
    /// Broadcasting station identifier, 0 when unset
    pub station_id: i32,
    /// Correction service resolved from [PppInfo::station_id]
    pub service: PppService,
}

impl Default for PppInfo {
    fn default() -> Self {
        Self {
            solution_status: SolutionStatus::NoValue,
            position_type: PositionVelocityType::NoValue,
            velocity_type: PositionVelocityType::NoValue,
            datum: DatumId::NoValue,
            latitude: BAD_LATLON,
            longitude: BAD_LATLON,
            station_id: 0,
            service: PppService::NoValue,
        }
    }
}

impl PppInfo {
    /// True once the receiver reports a converged, usable PPP solution.
    pub fn is_computed(&self) -> bool {
        self.solution_status == SolutionStatus::SolComputed
    }

    /// Defines the station identifier and resolves the matching service.
    pub fn with_station_id(&self, station_id: i32) -> Self {
        let mut s = *self;
        s.station_id = station_id;
        s.service = PppService::from_station_id(station_id);
        s
    }
}
