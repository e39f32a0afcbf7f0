//! Escape sequence resolution
//!
//! Single left-to-right scan over a wire literal. Every backslash either
//! starts a complete, valid escape or is copied through as a literal
//! backslash, after which the scan resumes at the very next unit. Nothing is
//! ever reported as an error.

use super::table::{is_quoting_code_point, mnemonic_value};
use crate::text::MiString;

const BACKSLASH: u16 = b'\\' as u16;

/// Number of hex digits taken by `\x`
const MAX_HEX_DIGITS: usize = 4;
/// Number of octal digits taken by `\NNN`
const MAX_OCTAL_DIGITS: usize = 3;
/// Fixed digit counts of `\u` and `\U`
const SHORT_UNICODE_DIGITS: usize = 4;
const LONG_UNICODE_DIGITS: usize = 8;

/// A recognized escape following a backslash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Escape {
    /// Code point the escape stands for
    value: u32,
    /// Units consumed after the backslash
    len: usize,
    /// Single-letter escape of a quote, backslash or question mark
    quoting: bool,
}

/// Resolve every escape sequence in `literal`
///
/// Invalid or incomplete escapes are left untouched, one backslash at a time.
/// `\u` values are emitted as a single unit even inside the surrogate range;
/// `\U` values above 0xFFFF become surrogate pairs.
pub fn parse(literal: &MiString) -> MiString {
    resolve(literal.as_units(), false)
}

/// Like [`parse`], but `\'`, `\"`, `\\` and `\?` stay escaped
pub(crate) fn parse_keeping_quoting(literal: &MiString) -> MiString {
    resolve(literal.as_units(), true)
}

fn resolve(units: &[u16], keep_quoting: bool) -> MiString {
    let mut out = MiString::with_capacity(units.len());
    let mut pos = 0;

    while pos < units.len() {
        let unit = units[pos];
        if unit != BACKSLASH {
            out.push_unit(unit);
            pos += 1;
            continue;
        }

        match match_escape(&units[pos + 1..]) {
            Some(esc) if keep_quoting && esc.quoting => {
                out.push_unit(BACKSLASH);
                out.push_unit(units[pos + 1]);
                pos += 2;
            },
            Some(esc) => {
                out.push_code_point(esc.value);
                pos += 1 + esc.len;
            },
            None => {
                log::trace!("invalid escape at {}, keeping backslash", pos);
                out.push_unit(BACKSLASH);
                pos += 1;
            },
        }
    }

    out
}

/// Match the escape body that follows a backslash
///
/// `None` means the backslash does not start a valid escape; no units are
/// consumed in that case.
fn match_escape(rest: &[u16]) -> Option<Escape> {
    let first = char::from_u32(*rest.first()? as u32)?;

    if let Some(value) = mnemonic_value(first) {
        return Some(Escape {
            value,
            len: 1,
            quoting: is_quoting_code_point(value),
        });
    }

    let (value, len) = match first {
        '0'..='7' => octal(rest)?,
        'x' => {
            let (value, digits) = hex_variable(&rest[1..])?;
            (value, 1 + digits)
        },
        'u' => {
            let value = hex_fixed(&rest[1..], SHORT_UNICODE_DIGITS)?;
            (value, 1 + SHORT_UNICODE_DIGITS)
        },
        'U' => {
            let value = hex_fixed(&rest[1..], LONG_UNICODE_DIGITS)?;
            if value > 0x10FFFF {
                return None;
            }
            (value, 1 + LONG_UNICODE_DIGITS)
        },
        _ => return None,
    };

    Some(Escape {
        value,
        len,
        quoting: false,
    })
}

fn octal_digit(unit: u16) -> Option<u32> {
    char::from_u32(unit as u32)?.to_digit(8)
}

fn hex_digit(unit: u16) -> Option<u32> {
    char::from_u32(unit as u32)?.to_digit(16)
}

/// Up to three octal digits, the value has to fit in a byte
fn octal(rest: &[u16]) -> Option<(u32, usize)> {
    let mut value = 0;
    let mut len = 0;
    for digit in rest.iter().take(MAX_OCTAL_DIGITS).map_while(|&u| octal_digit(u)) {
        value = value * 8 + digit;
        len += 1;
    }
    (len > 0 && value <= 0xFF).then_some((value, len))
}

/// One to four hex digits
fn hex_variable(rest: &[u16]) -> Option<(u32, usize)> {
    let mut value = 0;
    let mut len = 0;
    for digit in rest.iter().take(MAX_HEX_DIGITS).map_while(|&u| hex_digit(u)) {
        value = value << 4 | digit;
        len += 1;
    }
    (len > 0).then_some((value, len))
}

/// Exactly `count` hex digits
fn hex_fixed(rest: &[u16], count: usize) -> Option<u32> {
    if rest.len() < count {
        return None;
    }
    rest[..count]
        .iter()
        .try_fold(0u32, |value, &u| Some(value << 4 | hex_digit(u)?))
}
