use log::trace;

/// Decodes the station identifier field. The receiver quotes this field
/// (`"9901"` on the wire, quotes included), so a single pair of framing
/// quotes is removed before the numeric parse.
///
/// Numeric parsing is lenient, C `atol` style: optional sign, then the
/// leading digit run, everything past the first non-digit ignored.
/// Text with no leading number decodes as 0.
pub fn parse_station_id(text: &str) -> i32 {
    let bytes = text.as_bytes();

    let inner = if bytes.len() > 2 && bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"' {
        &bytes[1..bytes.len() - 1]
    } else {
        bytes
    };

    let station_id = lenient_atol(inner);
    trace!("station id field {:?} decoded as {}", text, station_id);

    station_id
}

fn lenient_atol(bytes: &[u8]) -> i32 {
    let mut cursor = 0;

    while bytes.get(cursor).is_some_and(|b| b.is_ascii_whitespace()) {
        cursor += 1;
    }

    let negative = match bytes.get(cursor) {
        Some(&b'-') => {
            cursor += 1;
            true
        },
        Some(&b'+') => {
            cursor += 1;
            false
        },
        _ => false,
    };

    let mut value: i64 = 0;
    while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
        value = value
            .saturating_mul(10)
            .saturating_add((bytes[cursor] - b'0') as i64);
        cursor += 1;
    }

    if negative {
        -(value as i32)
    } else {
        value as i32
    }
}
