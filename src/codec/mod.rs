//! MI string literal codec
//!
//! Four pure operations built on one escape table:
//! - `transcode`: raw bytes to text, UTF-8 where possible, Latin-1 otherwise
//! - `escape`: text to C-style literal
//! - `parse`: C-style literal to text
//! - `translate`: canonicalization combining the three

mod escape;
mod parse;
mod quote;
mod table;
mod transcode;
mod translate;

pub use escape::escape;
pub use parse::parse;
pub use quote::{quote, unquote};
pub use table::{
    is_special_char, is_special_code_point, parse_special_char, parse_special_code_point,
};
pub use transcode::transcode;
pub use translate::{decode, translate};

use crate::config::CodecConfig;
use crate::error::Result;
use crate::text::MiString;

/// String codec bound to a configuration
///
/// Holds no mutable state and can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Display text to wire literal
    pub fn encode(&self, text: &MiString) -> String {
        escape(text, self.config.escape_quoting)
    }

    /// Wire literal to display text
    pub fn decode(&self, literal: &MiString) -> MiString {
        decode(literal)
    }

    /// Bring partially escaped text into the configured canonical form
    pub fn canonicalize(&self, text: &MiString) -> MiString {
        translate(text, self.config.canonical_escape)
    }

    pub fn quote(&self, text: &MiString) -> String {
        quote(text)
    }

    pub fn unquote(&self, value: &str) -> Result<MiString> {
        unquote(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_default() {
        let codec = Codec::default();
        assert_eq!(codec.encode(&"'\t\\".into()), "\\'\\t\\\\");
        assert_eq!(codec.canonicalize(&"\\x0000".into()), "\\0");
        assert_eq!(codec.decode(&"\\303\\244".into()), "\u{e4}");
    }

    #[test]
    fn test_codec_configured() {
        let codec = Codec::new(CodecConfig {
            escape_quoting: false,
            canonical_escape: false,
        });
        assert!(!codec.config().escape_quoting);
        assert_eq!(codec.encode(&"'\t\\".into()), "'\\t\\");
        assert_eq!(codec.canonicalize(&"\\x0000".into()), "\0");
    }

    #[test]
    fn test_codec_quoting() {
        let codec = Codec::default();
        let quoted = codec.quote(&"a\"b".into());
        assert_eq!(quoted, "\"a\\\"b\"");
        assert_eq!(codec.unquote(&quoted).unwrap(), "a\"b");
    }

    #[test]
    fn test_codec_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Codec>();
    }
}
