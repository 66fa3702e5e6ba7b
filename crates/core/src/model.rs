//! Probability model derived from a frequency table.
//!
//! Normalizes counts to a distribution over the alphabet and computes the
//! information-theoretic baselines the reports need: Shannon entropy, the
//! fixed-width (uniform) code length, and the redundancy between them.
//!
//! All operations are pure arithmetic; an empty frequency table degenerates
//! to an empty distribution with entropy 0.

use std::collections::HashMap;

use crate::freq::FrequencyTable;
use crate::symbol::Symbol;

/// Symbol probabilities, preserving the frequency table's insertion order.
///
/// # Invariants
/// - Each probability is in (0, 1]
/// - Probabilities sum to 1.0 within floating-point tolerance (non-empty)
#[derive(Debug, Clone, Default)]
pub struct ProbabilityTable {
    /// (symbol, probability) in frequency-table insertion order
    entries: Vec<(Symbol, f64)>,
    /// symbol -> position in `entries`
    index: HashMap<Symbol, usize>,
}

impl ProbabilityTable {
    /// Probability of `symbol`, or 0.0 if absent.
    pub fn get(&self, symbol: &Symbol) -> f64 {
        self.index.get(symbol).map_or(0.0, |&pos| self.entries[pos].1)
    }

    /// Number of distinct symbols (alphabet size).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the distribution is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Shannon entropy in bits per symbol: -sum(p * log2(p)).
    ///
    /// Zero-probability terms are skipped (they contribute nothing and
    /// log2(0) is undefined). Empty distribution yields 0.0.
    pub fn entropy(&self) -> f64 {
        -self
            .entries
            .iter()
            .filter(|&&(_, p)| p > 0.0)
            .map(|&(_, p)| p * p.log2())
            .sum::<f64>()
    }

    /// Bits per symbol for a fixed-width code over this alphabet.
    ///
    /// `ceil(log2(k))` for k > 1, one bit for a single-symbol alphabet,
    /// zero for an empty one.
    pub fn uniform_code_length(&self) -> u32 {
        match self.len() {
            0 => 0,
            1 => 1,
            k => (k - 1).ilog2() + 1,
        }
    }

    /// Gap between the fixed-width code and the entropy-optimal length.
    pub fn redundancy(&self) -> f64 {
        f64::from(self.uniform_code_length()) - self.entropy()
    }
}

/// Normalize a frequency table into a probability distribution.
///
/// Each count is divided by the total count. An empty frequency table
/// yields an empty distribution.
pub fn build_probabilities(freqs: &FrequencyTable) -> ProbabilityTable {
    let total = freqs.total();
    if total == 0 {
        return ProbabilityTable::default();
    }

    let mut entries = Vec::with_capacity(freqs.len());
    let mut index = HashMap::with_capacity(freqs.len());
    for (symbol, count) in freqs.iter() {
        index.insert(symbol, entries.len());
        entries.push((symbol, count as f64 / total as f64));
    }

    ProbabilityTable { entries, index }
}
