//! Error types for the MI string codec

use std::io;
use thiserror::Error;

/// Codec error type
///
/// Malformed escapes never show up here: the parser and transcoder degrade
/// them to literal text. Only the mnemonic lookups and the configuration
/// and quoting helpers can fail.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Letter is not one of the escape table mnemonics
    #[error("not a recognized escape mnemonic: {0:?}")]
    UnknownMnemonic(char),

    /// Code point has no mnemonic in the escape table
    #[error("not a recognized escape code point: U+{0:04X}")]
    UnknownCodePoint(u32),

    /// Quoted string value is missing its surrounding double quotes
    #[error("string value is not enclosed in double quotes")]
    Unquoted,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
