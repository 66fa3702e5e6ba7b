//! Analysis results and reporting for a coded text.
//!
//! This module provides observable insight into one analysis run:
//! - Information statistics (entropy, uniform baseline, redundancy)
//! - Achieved code statistics (average length, efficiency, ratio)
//! - The derived tables, for rendering per-symbol reports
//!
//! # Design
//!
//! One `Analysis` is produced per (text, mode) call by running the whole
//! pipeline: count -> normalize -> build code -> encode -> decode. The
//! round trip is part of the pipeline so every `Analysis` carries proof of
//! lossless coding. Analyses are independent; nothing is shared or cached
//! between calls.

use crate::codec::{decode, encode};
use crate::error::Result;
use crate::fano::{build_code, CodeTable};
use crate::freq::{count_frequencies, FrequencyTable};
use crate::model::{build_probabilities, ProbabilityTable};
use crate::symbol::PairingMode;

/// Complete results of analyzing and coding one text in one mode.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Pairing mode the text was segmented under
    pub mode: PairingMode,

    /// Character length of the original text
    pub original_chars: usize,

    // === Derived tables ===
    /// Symbol occurrence counts
    pub frequencies: FrequencyTable,

    /// Normalized probability distribution
    pub probabilities: ProbabilityTable,

    /// Shannon-Fano code assignments
    pub codes: CodeTable,

    // === Information statistics ===
    /// Shannon entropy in bits per symbol
    pub entropy: f64,

    /// Fixed-width code baseline in bits per symbol
    pub uniform_code_length: u32,

    /// uniform_code_length - entropy
    pub redundancy: f64,

    /// Probability-weighted average code length in bits per symbol
    pub average_code_length: f64,

    // === Coding results ===
    /// Total encoded length in bits
    pub encoded_bits: usize,

    /// Round-trip decoder output (equals the original text)
    pub decoded_text: String,
}

impl Analysis {
    /// Entropy as a percentage of the achieved average code length.
    ///
    /// 100% means the code reached the entropy bound. Returns 0.0 when the
    /// average length is 0 (empty input).
    pub fn compression_efficiency(&self) -> f64 {
        if self.average_code_length == 0.0 {
            0.0
        } else {
            self.entropy / self.average_code_length * 100.0
        }
    }

    /// Encoded bits relative to an 8-bit-per-character baseline.
    ///
    /// Returns 0.0 for empty input.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_chars == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / (self.original_chars as f64 * 8.0)
        }
    }

    /// Per-symbol statistics rows, sorted by symbol.
    pub fn statistics_rows(&self) -> Vec<StatRow> {
        let mut rows: Vec<StatRow> = self
            .frequencies
            .iter()
            .map(|(symbol, frequency)| StatRow {
                symbol: symbol.as_text(),
                frequency,
                probability: self.probabilities.get(&symbol),
                code: self
                    .codes
                    .get(&symbol)
                    .map(|code| code.to_string())
                    .unwrap_or_default(),
            })
            .collect();
        rows.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        rows
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        let mode = match self.mode {
            PairingMode::Single => "single characters",
            PairingMode::Pair => "character pairs",
        };

        println!("=== Analysis ({mode}) ===");
        println!("Alphabet size: {}", self.frequencies.len());
        println!("Entropy: {:.4} bits/symbol", self.entropy);
        println!("Uniform code length: {} bits", self.uniform_code_length);
        println!("Redundancy: {:.4} bits", self.redundancy);
        println!(
            "Average code length: {:.4} bits/symbol",
            self.average_code_length
        );
        println!(
            "Compression efficiency: {:.2}%",
            self.compression_efficiency()
        );
        println!("Encoded length: {} bits", self.encoded_bits);
        println!("Compression ratio: {:.4}", self.compression_ratio());
        println!();
    }

    /// Print the per-symbol statistics table to stdout.
    pub fn print_table(&self) {
        println!("{:<10} {:>9} {:>12} {:>6}  {}", "Symbol", "Frequency", "Probability", "Bits", "Code");
        for row in self.statistics_rows() {
            println!(
                "{:<10} {:>9} {:>12.4} {:>6}  {}",
                format!("{:?}", row.symbol),
                row.frequency,
                row.probability,
                row.code.len(),
                row.code,
            );
        }
        println!();
    }

    /// Export the analysis as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "alphabet_size={}\n\
             entropy={:.4}\n\
             uniform_code_length={}\n\
             redundancy={:.4}\n\
             average_code_length={:.4}\n\
             compression_efficiency={:.2}\n\
             encoded_bits={}\n\
             compression_ratio={:.4}\n",
            self.frequencies.len(),
            self.entropy,
            self.uniform_code_length,
            self.redundancy,
            self.average_code_length,
            self.compression_efficiency(),
            self.encoded_bits,
            self.compression_ratio(),
        )
    }
}

/// One row of the per-symbol statistics table.
#[derive(Debug, Clone)]
pub struct StatRow {
    /// The symbol's characters
    pub symbol: String,
    /// Occurrence count
    pub frequency: u64,
    /// Probability in (0, 1]
    pub probability: f64,
    /// Assigned code as '0'/'1' characters
    pub code: String,
}

/// Run the full pipeline over `text` in the given mode.
///
/// Counts frequencies, derives the probability model, builds the code
/// table, encodes, and decodes again. Empty text degenerates to empty
/// tables and zero statistics rather than failing; callers that consider
/// empty input an error should reject it before calling.
///
/// # Errors
/// Propagates encode and decode failures; neither occurs for a well-formed
/// text since the tables share its provenance.
pub fn analyze(text: &str, mode: PairingMode) -> Result<Analysis> {
    let frequencies = count_frequencies(text, mode);
    let probabilities = build_probabilities(&frequencies);
    let codes = build_code(&probabilities);

    let encoded = encode(text, &codes, mode)?;
    let decoded_text = decode(&encoded, &codes, mode, text.chars().count())?;

    Ok(Analysis {
        mode,
        original_chars: text.chars().count(),
        entropy: probabilities.entropy(),
        uniform_code_length: probabilities.uniform_code_length(),
        redundancy: probabilities.redundancy(),
        average_code_length: codes.average_length(&probabilities),
        encoded_bits: encoded.len(),
        decoded_text,
        frequencies,
        probabilities,
        codes,
    })
}
