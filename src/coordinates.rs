use log::trace;

use crate::error::Error;

/// Fixed point scaling: decoded angles are degrees times 1E7.
pub const LATLON_SCALE: i32 = 10_000_000;

/// Sentinel returned by [parse_degrees] on malformed coordinate text.
/// Out of reach of any valid angle (±181° spans ±1.81E9 at most).
pub const BAD_LATLON: i32 = i32::MAX;

/// Decodes the receiver decimal degree text format (`"55.7558123"`)
/// into fixed point degrees times [LATLON_SCALE].
///
/// The field must start with a digit, carry a whole degree part within
/// ±181, then a mandatory decimal point. Up to 7 fractional digits are
/// accumulated; anything beyond the 7th is ignored. Malformed text
/// yields [BAD_LATLON].
///
/// The digit-first requirement also rejects a leading `-`: the receiver
/// protocol this decoder is paired with never produced a parseable
/// negative angle, and that contract is kept as is for compatibility.
pub fn parse_degrees(text: &str) -> i32 {
    let bytes = text.as_bytes();

    if !bytes.first().is_some_and(|b| b.is_ascii_digit()) {
        trace!("coordinate field {:?} does not start with a digit", text);
        return BAD_LATLON;
    }

    let mut cursor = 0;
    let mut whole: i64 = 0;
    while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
        whole = whole
            .saturating_mul(10)
            .saturating_add((bytes[cursor] - b'0') as i64);
        cursor += 1;
    }

    if !(-181..=181).contains(&whole) {
        trace!("coordinate field {:?} out of range", text);
        return BAD_LATLON;
    }

    if bytes.get(cursor) != Some(&b'.') {
        trace!("coordinate field {:?} has no decimal point", text);
        return BAD_LATLON;
    }

    cursor += 1;

    let mut weight = LATLON_SCALE / 10;
    let mut fraction = 0;
    while weight > 0 && cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
        fraction += (bytes[cursor] - b'0') as i32 * weight;
        weight /= 10;
        cursor += 1;
    }

    whole as i32 * LATLON_SCALE + fraction
}

/// Strict flavor of [parse_degrees].
pub fn try_parse_degrees(text: &str) -> Result<i32, Error> {
    match parse_degrees(text) {
        BAD_LATLON => Err(Error::MalformedCoordinate),
        latlon => Ok(latlon),
    }
}
