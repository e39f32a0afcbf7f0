//! Escape table
//!
//! Bidirectional mapping between the control code points that have a
//! single-letter C escape and their mnemonic letters.

use crate::error::{CodecError, Result};

/// Code point to mnemonic, the forward direction
const ESCAPE_TABLE: [(u32, char); 12] = [
    (0x07, 'a'),  // BEL
    (0x08, 'b'),  // BS
    (0x1B, 'e'),  // ESC
    (0x0C, 'f'),  // FF
    (0x0A, 'n'),  // LF
    (0x0D, 'r'),  // CR
    (0x09, 't'),  // HT
    (0x0B, 'v'),  // VT
    (0x27, '\''), // single quote
    (0x22, '"'),  // double quote
    (0x5C, '\\'), // backslash
    (0x3F, '?'),  // question mark
];

/// Code points that are only escaped when quoting is requested
const QUOTING_CODE_POINTS: [u32; 4] = [0x27, 0x22, 0x5C, 0x3F];

/// Extra mnemonics accepted on input but never produced
const MNEMONIC_ALIASES: [(char, u32); 1] = [('E', 0x1B)];

/// Check whether `letter` is a recognized escape mnemonic
pub fn is_special_char(letter: char) -> bool {
    mnemonic_value(letter).is_some()
}

/// Check whether `cp` has an escape mnemonic
pub fn is_special_code_point(cp: u32) -> bool {
    code_point_mnemonic(cp).is_some()
}

/// Map a mnemonic letter to its code point
pub fn parse_special_char(letter: char) -> Result<u32> {
    mnemonic_value(letter).ok_or(CodecError::UnknownMnemonic(letter))
}

/// Map a code point to its mnemonic letter
///
/// 0x1B always maps to `e`, never to the `E` alias.
pub fn parse_special_code_point(cp: u32) -> Result<char> {
    code_point_mnemonic(cp).ok_or(CodecError::UnknownCodePoint(cp))
}

/// Whether `cp` is one of the quote, backslash or question mark code points
pub(crate) fn is_quoting_code_point(cp: u32) -> bool {
    QUOTING_CODE_POINTS.contains(&cp)
}

pub(crate) fn mnemonic_value(letter: char) -> Option<u32> {
    ESCAPE_TABLE
        .iter()
        .find(|&&(_, m)| m == letter)
        .map(|&(cp, _)| cp)
        .or_else(|| {
            MNEMONIC_ALIASES
                .iter()
                .find(|&&(m, _)| m == letter)
                .map(|&(_, cp)| cp)
        })
}

pub(crate) fn code_point_mnemonic(cp: u32) -> Option<char> {
    ESCAPE_TABLE
        .iter()
        .find(|&&(c, _)| c == cp)
        .map(|&(_, m)| m)
}
