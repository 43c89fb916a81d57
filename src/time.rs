/// Seconds per GPS week.
pub const SECONDS_PER_WEEK: u32 = 7 * 24 * 3600;

/// Offset in seconds between the Unix epoch (1970-01-01T00:00:00 UTC)
/// and the GPS epoch (1980-01-06T00:00:00 UTC): 3657 days.
pub const GPS_UNIX_EPOCH_DELTA_S: u32 = 3657 * 24 * 3600;

const MILLIS_PER_SEC: u32 = 1000;

/// Converts a GPS timestamp (week counter, milliseconds into the week)
/// to a Unix timestamp, as whole seconds plus the sub-second remainder
/// in milliseconds. `leap_seconds` is the accumulated GPS-UTC offset
/// broadcast by the receiver (18 s as of 2017).
///
/// All arithmetic is unsigned 32-bit and wraps modulo 2^32, matching
/// the receiver firmware this decoder is paired with.
pub fn gps_to_unix(week: i32, ms_of_week: i32, leap_seconds: u32) -> (u32, u32) {
    let millis = (ms_of_week as u32) % MILLIS_PER_SEC;

    let seconds = (week as u32)
        .wrapping_mul(SECONDS_PER_WEEK)
        .wrapping_add(ms_of_week as u32 / MILLIS_PER_SEC)
        .wrapping_sub(leap_seconds)
        .wrapping_add(GPS_UNIX_EPOCH_DELTA_S);

    (seconds, millis)
}

#[cfg(test)]
mod test {
    use super::{gps_to_unix, GPS_UNIX_EPOCH_DELTA_S, SECONDS_PER_WEEK};
    use rstest::*;

    #[test]
    fn gps_epoch() {
        assert_eq!(gps_to_unix(0, 0, 0), (315_964_800, 0));
    }

    #[rstest]
    #[case(2000, 500, 18)]
    #[case(2000, 0, 0)]
    #[case(2345, 345_678_901, 18)]
    #[case(1024, 1500, 13)]
    fn formula_identity(#[case] week: i32, #[case] ms_of_week: i32, #[case] leap_seconds: u32) {
        let (seconds, millis) = gps_to_unix(week, ms_of_week, leap_seconds);
        assert_eq!(
            seconds,
            week as u32 * SECONDS_PER_WEEK + ms_of_week as u32 / 1000 - leap_seconds
                + GPS_UNIX_EPOCH_DELTA_S,
        );
        assert_eq!(millis, ms_of_week as u32 % 1000);
    }

    #[test]
    fn sub_second_remainder() {
        assert_eq!(gps_to_unix(2000, 500, 18).1, 500);
        // ms >= 1000 rolls into the seconds part
        let (seconds, millis) = gps_to_unix(2000, 1500, 18);
        assert_eq!(millis, 500);
        assert_eq!(seconds, gps_to_unix(2000, 500, 18).0 + 1);
    }

    #[test]
    fn cross_checked_against_hifitime() {
        use hifitime::Epoch;

        // GPS epoch, no leap correction applied
        let epoch = Epoch::from_gregorian_utc_at_midnight(1980, 1, 6);
        assert_eq!(
            gps_to_unix(0, 0, 0).0 as f64,
            epoch.to_unix_seconds(),
        );

        assert_eq!(GPS_UNIX_EPOCH_DELTA_S, 315_964_800);
    }
}
