//! shannon-fano-core: Statistical text analysis and Shannon-Fano prefix coding
//!
//! This library provides the core components for a system that:
//! - Tallies symbol (or symbol-pair) frequencies over an input text
//! - Derives a probability model with entropy and redundancy statistics
//! - Builds a prefix-free binary code by recursive Shannon-Fano partitioning
//! - Encodes the text to a bit sequence and decodes it back losslessly
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `bits`: Packed bit-vector used for codes and encoded output
//! - `symbol`: Symbol type, pairing modes, and text segmentation
//! - `freq`: Frequency counting over segmented text
//! - `model`: Probability distribution, entropy, uniform-code baseline
//! - `fano`: Shannon-Fano code construction
//! - `codec`: Encoding and decoding against a code table
//! - `report`: Aggregated analysis results and statistics
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Deterministic**: Identical input always yields identical codes
//! - **Pure**: Every table is recomputed from one immutable text per call;
//!   no shared mutable state across analyses
//!
//! Data flows one direction: text -> frequencies -> probabilities -> code
//! table -> encoded bits -> (round trip) -> decoded text.

pub mod bits;
pub mod codec;
pub mod error;
pub mod fano;
pub mod freq;
pub mod model;
pub mod report;
pub mod symbol;

// Re-export commonly used types
pub use error::{Error, Result};
