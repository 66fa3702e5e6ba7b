//! Encoding and decoding against a Shannon-Fano code table.
//!
//! Encoding partitions the text exactly like the frequency counter (same
//! pairing rule, same trailing pad) and concatenates the per-symbol codes
//! in text order. A symbol missing from the table is a hard error, not a
//! silent skip: a table built from the text's own frequencies covers every
//! symbol, so a miss means the table and text have different provenance.
//!
//! Decoding scans the bit sequence left to right, growing a candidate
//! buffer until it exactly matches a code. Prefix-freedom guarantees no
//! earlier boundary was possible, so greedy earliest-match decoding is
//! unique. Two corruption states are detected rather than papered over:
//! a buffer that is neither a code nor the prefix of any code, and leftover
//! bits at end of input.
//!
//! # Pair-Mode Pad Stripping
//!
//! An odd-length text in pair mode encodes its last character padded with a
//! space. The decoder cannot tell that pad from a genuine mid-text
//! "char + space" pair by looking at the bits alone, so the original text
//! length is passed as explicit decode context: the pad is stripped only
//! when emitting a padded pair while exactly one character short of the
//! original length.

use std::collections::{HashMap, HashSet};

use crate::bits::BitVec;
use crate::error::{DecodeError, EncodeError, Result};
use crate::fano::CodeTable;
use crate::symbol::{segment, PairingMode, Symbol};

/// Encode `text` into a bit sequence using `codes`.
///
/// The table must have been built in the same pairing mode. Empty text
/// yields an empty bit sequence.
///
/// # Errors
/// `EncodeError::SymbolNotInTable` if the text contains a symbol the table
/// has no code for.
pub fn encode(text: &str, codes: &CodeTable, mode: PairingMode) -> Result<BitVec> {
    let mut bits = BitVec::new();
    for symbol in segment(text, mode) {
        let code = codes.get(&symbol).ok_or_else(|| EncodeError::SymbolNotInTable {
            symbol: symbol.as_text(),
        })?;
        bits.extend_from(code);
    }
    Ok(bits)
}

/// Decode a bit sequence back into text.
///
/// `original_len` is the character length of the text that was encoded; in
/// pair mode it disambiguates the trailing pad (see module docs). Empty
/// input decodes to an empty string.
///
/// # Errors
/// - `DecodeError::UnknownSequence` if the accumulated bits can never
///   complete a code (corrupted input)
/// - `DecodeError::TrailingBits` if bits remain that do not form a whole
///   code
pub fn decode(
    bits: &BitVec,
    codes: &CodeTable,
    mode: PairingMode,
    original_len: usize,
) -> Result<String> {
    let (inverse, prefixes) = build_inverse(codes);

    let mut decoded = String::new();
    let mut decoded_chars = 0usize;
    let mut buffer = BitVec::new();

    for (position, bit) in bits.iter().enumerate() {
        buffer.push(bit);

        if let Some(&symbol) = inverse.get(&buffer) {
            if mode == PairingMode::Pair
                && symbol.is_padded_pair()
                && decoded_chars == original_len.saturating_sub(1)
            {
                // Trailing pad: keep only the real character
                if let Symbol::Pair(ch, _) = symbol {
                    decoded.push(ch);
                    decoded_chars += 1;
                }
            } else {
                symbol.write_to(&mut decoded);
                decoded_chars += match symbol {
                    Symbol::Char(_) => 1,
                    Symbol::Pair(..) => 2,
                };
            }
            buffer = BitVec::new();
        } else if !prefixes.contains(&buffer) {
            return Err(DecodeError::UnknownSequence { position }.into());
        }
    }

    if !buffer.is_empty() {
        return Err(DecodeError::TrailingBits {
            remaining: buffer.len(),
        }
        .into());
    }

    Ok(decoded)
}

/// Build the code -> symbol inverse map and the set of all proper code
/// prefixes.
///
/// The inverse is unambiguous because the table is prefix-free. The prefix
/// set lets the scanner detect a stuck state the moment the buffer leaves
/// the code tree.
fn build_inverse(codes: &CodeTable) -> (HashMap<BitVec, Symbol>, HashSet<BitVec>) {
    let mut inverse = HashMap::with_capacity(codes.len());
    let mut prefixes = HashSet::new();

    for (symbol, code) in codes.iter() {
        inverse.insert(code.clone(), symbol);

        let mut prefix = BitVec::new();
        for bit in code.iter().take(code.len().saturating_sub(1)) {
            prefix.push(bit);
            prefixes.insert(prefix.clone());
        }
    }

    (inverse, prefixes)
}
