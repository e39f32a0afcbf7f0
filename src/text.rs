//! 16-bit code unit strings
//!
//! Debugger output reaches the codec as raw bytes and may decode to text that
//! is not valid Unicode (a `\ud800` escape yields a lone surrogate). `MiString`
//! stores UTF-16 code units so that every such value survives a round trip.

use std::fmt;

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Check whether a unit is either half of a surrogate pair
pub fn is_surrogate(unit: u16) -> bool {
    (0xD800..=0xDFFF).contains(&unit)
}

/// String of 16-bit code units
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MiString {
    units: Vec<u16>,
}

impl MiString {
    /// Create an empty string
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty string with room for `capacity` units
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            units: Vec::with_capacity(capacity),
        }
    }

    /// Wrap existing code units
    pub fn from_units(units: Vec<u16>) -> Self {
        Self { units }
    }

    /// Raw byte-text: each byte becomes one unit holding its value
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            units: bytes.iter().map(|&b| b as u16).collect(),
        }
    }

    /// Inverse of [`MiString::from_bytes`], `None` if any unit is above 0xFF
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        self.units.iter().map(|&u| u8::try_from(u).ok()).collect()
    }

    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    /// Number of code units (not characters)
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Append a single unit unchanged, surrogates included
    pub fn push_unit(&mut self, unit: u16) {
        self.units.push(unit);
    }

    /// Append a code point
    ///
    /// Values up to 0xFFFF take one unit (even inside the surrogate range),
    /// larger values are split into a high/low surrogate pair.
    pub fn push_code_point(&mut self, cp: u32) {
        if cp <= 0xFFFF {
            self.units.push(cp as u16);
        } else {
            let v = cp - 0x10000;
            self.units.push(0xD800 | (v >> 10) as u16);
            self.units.push(0xDC00 | (v & 0x3FF) as u16);
        }
    }

    pub fn push_str(&mut self, s: &str) {
        self.units.extend(s.encode_utf16());
    }

    /// Iterate over code points
    ///
    /// A high surrogate directly followed by a low surrogate is combined into
    /// one scalar; any other surrogate unit is yielded on its own.
    pub fn scalars(&self) -> Scalars<'_> {
        Scalars {
            units: &self.units,
            pos: 0,
        }
    }

    /// Convert to a Rust string, replacing unpaired surrogates with U+FFFD
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }
}

/// A code point produced by [`MiString::scalars`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar {
    /// Code point value, a raw surrogate value when unpaired
    pub value: u32,
    /// Number of units the scalar occupied (2 for an assembled pair)
    pub width: usize,
}

impl Scalar {
    /// Whether this value came from a valid surrogate pair
    pub fn is_pair(&self) -> bool {
        self.width == 2
    }

    /// Whether this is a lone surrogate unit
    pub fn is_unpaired_surrogate(&self) -> bool {
        self.width == 1 && is_surrogate(self.value as u16)
    }
}

/// Iterator over the code points of an [`MiString`]
#[derive(Debug, Clone)]
pub struct Scalars<'a> {
    units: &'a [u16],
    pos: usize,
}

impl Iterator for Scalars<'_> {
    type Item = Scalar;

    fn next(&mut self) -> Option<Scalar> {
        let unit = *self.units.get(self.pos)?;
        if HIGH_SURROGATES.contains(&unit) {
            if let Some(&low) = self.units.get(self.pos + 1) {
                if LOW_SURROGATES.contains(&low) {
                    self.pos += 2;
                    let value =
                        0x10000 + (((unit as u32) & 0x3FF) << 10) + ((low as u32) & 0x3FF);
                    return Some(Scalar { value, width: 2 });
                }
            }
        }
        self.pos += 1;
        Some(Scalar {
            value: unit as u32,
            width: 1,
        })
    }
}

impl From<&str> for MiString {
    fn from(s: &str) -> Self {
        Self {
            units: s.encode_utf16().collect(),
        }
    }
}

impl From<String> for MiString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&String> for MiString {
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Vec<u16>> for MiString {
    fn from(units: Vec<u16>) -> Self {
        Self { units }
    }
}

impl TryFrom<MiString> for String {
    type Error = std::string::FromUtf16Error;

    fn try_from(s: MiString) -> Result<Self, Self::Error> {
        String::from_utf16(&s.units)
    }
}

impl FromIterator<u16> for MiString {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for MiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in char::decode_utf16(self.units.iter().copied()) {
            fmt::Write::write_char(f, c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl PartialEq<str> for MiString {
    fn eq(&self, other: &str) -> bool {
        self.units.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for MiString {
    fn eq(&self, other: &&str) -> bool {
        <Self as PartialEq<str>>::eq(self, other)
    }
}

impl PartialEq<String> for MiString {
    fn eq(&self, other: &String) -> bool {
        <Self as PartialEq<str>>::eq(self, other.as_str())
    }
}
