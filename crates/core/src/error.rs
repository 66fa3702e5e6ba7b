//! Error types for the shannon-fano system.
//!
//! All operations return structured errors rather than panicking.
//! This enables graceful shutdown and clear error reporting.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Encode: a text symbol has no entry in the code table
/// - Decode: the bit sequence does not decompose into whole codes
/// - I/O: reading input files (application layer)
/// - Config: command-line misuse (application layer)
#[derive(Debug, Error)]
pub enum Error {
    /// Encoding failed (symbol missing from the code table)
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Decoding failed (corrupted or truncated bit sequence)
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Encoding errors.
///
/// A code table built from the text's own frequency table covers every
/// symbol the segmenter produces, so these only occur when table and text
/// come from different sources.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Text contains a symbol the code table has no code for
    #[error("symbol {symbol:?} has no code in the table")]
    SymbolNotInTable { symbol: String },
}

/// Decoding errors.
///
/// Both variants indicate a corrupted bit sequence; the decoder never
/// truncates or fabricates output to recover.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Bits left over at the end that do not form a complete code
    #[error("{remaining} trailing bits do not form a complete code")]
    TrailingBits { remaining: usize },

    /// Accumulated bits match no code and are not a prefix of any code
    #[error("unknown bit sequence at bit position {position}")]
    UnknownSequence { position: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
