//! Double-quoted MI string values

use super::escape::escape;
use super::translate::decode;
use crate::error::{CodecError, Result};
use crate::text::MiString;

/// Escape `text` and wrap it in double quotes for use as a command argument
pub fn quote(text: &MiString) -> String {
    let body = escape(text, true);
    let mut out = String::with_capacity(body.len() + 2);
    out.push('"');
    out.push_str(&body);
    out.push('"');
    out
}

/// Strip the surrounding double quotes from a string value and decode it
pub fn unquote(value: &str) -> Result<MiString> {
    let body = value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(CodecError::Unquoted)?;
    Ok(decode(&body.into()))
}
