//! Frequency counting over segmented text.
//!
//! One pass over the symbols produced by `symbol::segment`. The table keeps
//! first-occurrence insertion order: code construction breaks probability
//! ties by this order, which is what makes codes reproducible across runs
//! with identical input.

use std::collections::HashMap;

use crate::symbol::{segment, PairingMode, Symbol};

/// Symbol occurrence counts, in first-occurrence order.
///
/// # Invariants
/// - `total()` equals the number of symbols segmented from the source text
/// - Every count is >= 1 (symbols only enter the table by being seen)
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// (symbol, count) in first-occurrence order
    entries: Vec<(Symbol, u64)>,
    /// symbol -> position in `entries`
    index: HashMap<Symbol, usize>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `symbol`.
    pub fn add(&mut self, symbol: Symbol) {
        match self.index.get(&symbol) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, 1));
            }
        }
    }

    /// Count for `symbol`, or 0 if unseen.
    pub fn get(&self, symbol: &Symbol) -> u64 {
        self.index.get(symbol).map_or(0, |&pos| self.entries[pos].1)
    }

    /// Number of distinct symbols (alphabet size).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no symbols were counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Iterate entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.entries.iter().copied()
    }
}

/// Count symbol frequencies in `text` under the given pairing mode.
///
/// Empty text yields an empty table; downstream components tolerate that.
pub fn count_frequencies(text: &str, mode: PairingMode) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for symbol in segment(text, mode) {
        table.add(symbol);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_frequencies() {
        let table = count_frequencies("aaabbc", PairingMode::Single);

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&Symbol::Char('a')), 3);
        assert_eq!(table.get(&Symbol::Char('b')), 2);
        assert_eq!(table.get(&Symbol::Char('c')), 1);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let table = count_frequencies("cabcab", PairingMode::Single);
        let order: Vec<Symbol> = table.iter().map(|(s, _)| s).collect();

        assert_eq!(
            order,
            vec![Symbol::Char('c'), Symbol::Char('a'), Symbol::Char('b')]
        );
    }

    #[test]
    fn test_total_matches_symbol_count() {
        // Single mode: one symbol per char
        let single = count_frequencies("hello world", PairingMode::Single);
        assert_eq!(single.total(), 11);

        // Pair mode: ceil(len / 2) symbols
        let pairs = count_frequencies("hello world", PairingMode::Pair);
        assert_eq!(pairs.total(), 6);
    }

    #[test]
    fn test_pair_mode_pads_trailing_char() {
        let table = count_frequencies("abc", PairingMode::Pair);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&Symbol::Pair('a', 'b')), 1);
        assert_eq!(table.get(&Symbol::Pair('c', ' ')), 1);
    }

    #[test]
    fn test_empty_text() {
        let table = count_frequencies("", PairingMode::Single);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_unseen_symbol_is_zero() {
        let table = count_frequencies("aa", PairingMode::Single);
        assert_eq!(table.get(&Symbol::Char('z')), 0);
    }
}
