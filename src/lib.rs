#![doc = include_str!("../README.md")]

// private modules
mod coordinates;
mod crc;
mod datum;
mod error;
mod info;
mod postype;
mod service;
mod station;
mod status;
mod time;
mod token;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::coordinates::{parse_degrees, try_parse_degrees, BAD_LATLON, LATLON_SCALE};
    pub use crate::crc::{crc32_checksum, crc32_push_byte};
    pub use crate::datum::DatumId;
    pub use crate::info::PppInfo;
    pub use crate::postype::PositionVelocityType;
    pub use crate::service::PppService;
    pub use crate::station::parse_station_id;
    pub use crate::status::SolutionStatus;
    pub use crate::time::{gps_to_unix, GPS_UNIX_EPOCH_DELTA_S, SECONDS_PER_WEEK};
    pub use crate::token::normalize_token;
}

// pub export
pub use error::Error;
