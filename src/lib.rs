//! MI String Codec Library
//!
//! Moves text between a debugger front-end and a command-line debugger
//! speaking the machine interface (MI) protocol, whose string values are
//! C-style quoted literals. This crate provides:
//!
//! - `text`: 16-bit code unit strings that can hold raw bytes and lone surrogates
//! - `codec`: escaping, parsing, UTF-8 transcoding and canonicalization
//! - `config`: serializable codec settings
//!
//! Every operation is a pure function; malformed escapes in debugger output
//! degrade to literal text instead of failing.

pub mod codec;
pub mod config;
pub mod error;
pub mod text;

pub use codec::{
    decode, escape, is_special_char, is_special_code_point, parse, parse_special_char,
    parse_special_code_point, quote, transcode, translate, unquote, Codec,
};
pub use config::CodecConfig;
pub use error::{CodecError, Result};
pub use text::MiString;
