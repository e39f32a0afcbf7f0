//! Opportunistic UTF-8 decoding of raw byte-text
//!
//! The debugger prints strings in whatever encoding the inferior used. Each
//! position is tried as the start of a UTF-8 sequence; anything that does not
//! form a complete, well-formed sequence is taken as a single Latin-1 byte.

use crate::text::MiString;

/// Decode the UTF-8 sequences found in `raw`, passing everything else through
///
/// Units above 0xFF are not bytes and are copied unchanged. Decoded values
/// above 0xFFFF are stored as surrogate pairs.
pub fn transcode(raw: &MiString) -> MiString {
    let units = raw.as_units();
    let mut out = MiString::with_capacity(units.len());
    let mut pos = 0;

    while pos < units.len() {
        match decode_sequence(&units[pos..]) {
            Some((cp, len)) => {
                out.push_code_point(cp);
                pos += len;
            },
            None => {
                if (0x80..=0xFF).contains(&units[pos]) {
                    log::trace!("latin-1 fallback for byte {:#04x} at {}", units[pos], pos);
                }
                out.push_unit(units[pos]);
                pos += 1;
            },
        }
    }

    out
}

/// Byte value of the unit at `index`, if it holds one
fn byte_at(units: &[u16], index: usize) -> Option<u8> {
    units.get(index).and_then(|&u| u8::try_from(u).ok())
}

/// Total sequence length and payload bits announced by a lead byte
fn lead_byte(byte: u8) -> Option<(usize, u32)> {
    if byte & 0b1110_0000 == 0b1100_0000 {
        // 2-byte sequence
        Some((2, (byte & 0x1F) as u32))
    } else if byte & 0b1111_0000 == 0b1110_0000 {
        // 3-byte sequence
        Some((3, (byte & 0x0F) as u32))
    } else if byte & 0b1111_1000 == 0b1111_0000 {
        // 4-byte sequence
        Some((4, (byte & 0x07) as u32))
    } else {
        // ASCII, stray continuation byte or 0xF8..=0xFF
        None
    }
}

/// Decode one complete multi-byte sequence at the start of `units`
///
/// Returns the code point and the number of units consumed. `None` means the
/// first unit has to be taken literally.
fn decode_sequence(units: &[u16]) -> Option<(u32, usize)> {
    let (expected, mut cp) = lead_byte(byte_at(units, 0)?)?;

    for i in 1..expected {
        let byte = byte_at(units, i)?;
        if byte & 0b1100_0000 != 0b1000_0000 {
            return None;
        }
        cp = cp << 6 | (byte & 0x3F) as u32;
    }

    // Reject overlong encodings, surrogates and values past U+10FFFF
    let valid = match expected {
        2 => cp >= 0x80,
        3 => cp >= 0x800 && !(0xD800..=0xDFFF).contains(&cp),
        _ => (0x10000..=0x10FFFF).contains(&cp),
    };

    valid.then_some((cp, expected))
}
