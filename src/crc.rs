/// Reflected CRC-32 polynomial used by the receiver block checksum.
const CRC32_POLYNOMIAL: u32 = 0xEDB8_8320;

/// Byte-indexed lookup table, built at compile time.
const CRC32_TABLE: [u32; 256] = crc32_table();

const fn crc32_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut index = 0;
    while index < 256 {
        let mut value = index as u32;
        let mut bit = 0;
        while bit < 8 {
            if value & 1 != 0 {
                value = CRC32_POLYNOMIAL ^ (value >> 1);
            } else {
                value >>= 1;
            }
            bit += 1;
        }
        table[index] = value;
        index += 1;
    }
    table
}

/// Whole-buffer checksum, from a zero initial state with no final XOR,
/// per the receiver convention. The empty buffer checksums to 0.
pub fn crc32_checksum(buffer: &[u8]) -> u32 {
    let mut state = 0;
    for byte in buffer.iter() {
        crc32_push_byte(*byte, &mut state);
    }
    state
}

/// Single byte update of a caller-owned running checksum, for feeding
/// fragmented input without buffering. Folding every byte of a buffer
/// into a state that started at 0 matches [crc32_checksum] exactly.
pub fn crc32_push_byte(byte: u8, state: &mut u32) {
    *state = CRC32_TABLE[((*state ^ byte as u32) & 0xFF) as usize] ^ (*state >> 8);
}

#[cfg(test)]
mod test {
    use super::{crc32_checksum, crc32_push_byte};

    #[test]
    fn empty_buffer_is_zero() {
        assert_eq!(crc32_checksum(&[]), 0);
    }

    #[test]
    fn known_values() {
        // reference values computed once against the published
        // receiver checksum routine (zero init, no final xor)
        assert_eq!(crc32_checksum(&[0x00]), 0);
        assert_eq!(crc32_checksum(b"X"), 0x65B0_D9C6);
        assert_eq!(crc32_checksum(b"123456789"), 0x2DFD_2D88);
    }

    #[test]
    fn incremental_matches_whole_buffer() {
        for buffer in [
            b"".to_vec(),
            b"X".to_vec(),
            b"$PVTSLN,SOL_COMPUTED,PPP".to_vec(),
            (0u16..300).map(|v| (v & 0xFF) as u8).collect::<Vec<_>>(),
        ] {
            let mut state = 0;
            for byte in buffer.iter() {
                crc32_push_byte(*byte, &mut state);
            }
            assert_eq!(state, crc32_checksum(&buffer), "len {}", buffer.len());
        }
    }
}
