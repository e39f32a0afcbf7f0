//! Normalization between wire literals and display text

use super::escape::escape;
use super::parse::{parse, parse_keeping_quoting};
use super::transcode::transcode;
use crate::text::MiString;

/// Reception pipeline: resolve escapes, then merge UTF-8 byte sequences
pub fn decode(literal: &MiString) -> MiString {
    transcode(&parse(literal))
}

/// Canonicalize a possibly partially escaped string
///
/// Escapes are resolved and any UTF-8 byte sequences they spell out are
/// merged into single characters. Without `canonical_escape` the result is
/// fully literal. With it, the text is escaped again in its shortest form
/// (`\x0000`, `\000` and a literal NUL all become `\0`); quote, backslash and
/// question mark escapes keep the notation they had in the input.
pub fn translate(text: &MiString, canonical_escape: bool) -> MiString {
    if !canonical_escape {
        return decode(text);
    }

    let folded = transcode(&parse_keeping_quoting(text));
    MiString::from(escape(&folded, false))
}
