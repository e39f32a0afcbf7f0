//! C-style escaping of display text
//!
//! Produces the wire form of a string: control characters become mnemonic or
//! octal escapes, lone surrogates and supplementary characters become `\u` and
//! `\U` escapes, and everything printable is copied through.

use std::fmt::Write;

use super::table::{code_point_mnemonic, is_quoting_code_point};
use crate::text::{MiString, Scalar};

/// Render `text` as an escaped literal
///
/// With `escape_quoting` set, `'`, `"`, `\` and `?` are escaped as well, which
/// makes the result safe to place between double quotes. The other mnemonic
/// characters are escaped either way.
pub fn escape(text: &MiString, escape_quoting: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut scalars = text.scalars().peekable();

    while let Some(c) = scalars.next() {
        let next = scalars.peek().map(|n| n.value);
        escape_scalar(&mut out, c, next, escape_quoting);
    }

    out
}

fn escape_scalar(out: &mut String, c: Scalar, next: Option<u32>, escape_quoting: bool) {
    let value = c.value;

    if let Some(letter) = code_point_mnemonic(value) {
        if is_quoting_code_point(value) && !escape_quoting {
            out.push(letter);
        } else {
            out.push('\\');
            out.push(letter);
        }
        return;
    }

    match value {
        0 => {
            // A bare \0 would swallow a following octal digit on re-parse
            if next.is_some_and(is_octal_digit) {
                out.push_str("\\000");
            } else {
                out.push_str("\\0");
            }
        },
        0x01..=0x1F | 0x7F..=0x9F => {
            let _ = write!(out, "\\{value:03o}");
        },
        _ if c.is_pair() => {
            let _ = write!(out, "\\U{value:08x}");
        },
        _ => match char::from_u32(value) {
            // Printable ASCII, Latin-1 and every other BMP character
            Some(ch) => out.push(ch),
            // Unpaired surrogate
            None => {
                let _ = write!(out, "\\u{value:04x}");
            },
        },
    }
}

fn is_octal_digit(cp: u32) -> bool {
    (0x30..=0x37).contains(&cp)
}
