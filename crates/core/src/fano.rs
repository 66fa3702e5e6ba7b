//! Shannon-Fano code construction.
//!
//! The coder sorts the alphabet by probability descending, then recursively
//! splits each contiguous sub-list into two groups of near-equal total
//! probability, appending a 0 to every code in the left group and a 1 to
//! every code in the right. Because each split appends a differing bit to
//! two disjoint subtrees under the same prefix, the resulting code is
//! prefix-free, which is what makes greedy decoding unambiguous.
//!
//! # Determinism
//!
//! Two tie-break rules make codes reproducible across runs:
//! - The sort is stable, so equal probabilities keep the frequency table's
//!   first-occurrence order.
//! - The split scan runs left to right and only replaces the best split on
//!   a strictly smaller imbalance, so the smallest split index wins ties.

use std::collections::HashMap;

use crate::bits::BitVec;
use crate::model::ProbabilityTable;
use crate::symbol::Symbol;

/// Prefix-free binary codes per symbol, in code-assignment order.
///
/// # Invariants
/// - Every code is non-empty
/// - No code is a prefix of another (prefix-free)
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    /// (symbol, code) in assignment order
    entries: Vec<(Symbol, BitVec)>,
    /// symbol -> position in `entries`
    index: HashMap<Symbol, usize>,
}

impl CodeTable {
    fn insert(&mut self, symbol: Symbol, code: BitVec) {
        self.index.insert(symbol, self.entries.len());
        self.entries.push((symbol, code));
    }

    /// Code for `symbol`, if assigned.
    pub fn get(&self, symbol: &Symbol) -> Option<&BitVec> {
        self.index.get(symbol).map(|&pos| &self.entries[pos].1)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no codes were assigned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate (symbol, code) pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &BitVec)> + '_ {
        self.entries.iter().map(|(symbol, code)| (*symbol, code))
    }

    /// Probability-weighted average code length in bits per symbol.
    pub fn average_length(&self, probs: &ProbabilityTable) -> f64 {
        self.entries
            .iter()
            .map(|(symbol, code)| probs.get(symbol) * code.len() as f64)
            .sum()
    }
}

/// Build a Shannon-Fano code table for the given distribution.
///
/// An empty distribution yields an empty table. A single-symbol alphabet
/// yields the one-bit code `0` by convention (a zero-bit code would make
/// the encoded text empty and undecodable).
pub fn build_code(probs: &ProbabilityTable) -> CodeTable {
    let mut items: Vec<(Symbol, f64)> = probs.iter().collect();
    // Stable: ties keep insertion order
    items.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut table = CodeTable::default();
    assign(&items, BitVec::new(), &mut table);
    table
}

/// Recursively partition `items` and assign codes into `table`.
///
/// The prefix is passed by value; each call derives its children's prefixes
/// without touching the caller's. Every recursive call strictly shrinks the
/// sub-list, so this always terminates.
fn assign(items: &[(Symbol, f64)], prefix: BitVec, table: &mut CodeTable) {
    match items {
        [] => {}
        [(symbol, _)] => {
            let code = if prefix.is_empty() {
                // Whole alphabet is one symbol
                BitVec::new().child(false)
            } else {
                prefix
            };
            table.insert(*symbol, code);
        }
        _ => {
            let split = best_split(items);
            assign(&items[..split], prefix.child(false), table);
            assign(&items[split..], prefix.child(true), table);
        }
    }
}

/// Find the split index that minimizes |left sum - right sum|.
///
/// Scans every split point 1..len with a running left sum; the first index
/// achieving the minimal imbalance wins.
fn best_split(items: &[(Symbol, f64)]) -> usize {
    let total: f64 = items.iter().map(|&(_, p)| p).sum();

    let mut best = 1;
    let mut best_diff = f64::INFINITY;
    let mut left = 0.0;

    for (i, &(_, p)) in items.iter().enumerate().take(items.len() - 1) {
        left += p;
        let diff = (left - (total - left)).abs();
        if diff < best_diff {
            best_diff = diff;
            best = i + 1;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::count_frequencies;
    use crate::model::build_probabilities;
    use crate::symbol::PairingMode;

    fn code_for(text: &str) -> CodeTable {
        let freqs = count_frequencies(text, PairingMode::Single);
        build_code(&build_probabilities(&freqs))
    }

    fn code_str(table: &CodeTable, c: char) -> String {
        table.get(&Symbol::Char(c)).expect("code missing").to_string()
    }

    #[test]
    fn test_known_codes() {
        // p = {a: 1/2, b: 1/3, c: 1/6}: first split isolates 'a' exactly
        let table = code_for("aaabbc");

        assert_eq!(code_str(&table, 'a'), "0");
        assert_eq!(code_str(&table, 'b'), "10");
        assert_eq!(code_str(&table, 'c'), "11");
    }

    #[test]
    fn test_single_symbol_gets_zero_code() {
        let table = code_for("aaaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(code_str(&table, 'a'), "0");
    }

    #[test]
    fn test_prefix_free() {
        for text in [
            "aaabbc",
            "hello world",
            "the quick brown fox jumps over the lazy dog",
            "mississippi",
            "abcdefghijklmnop",
            "aaaaabbbccd",
        ] {
            let table = code_for(text);
            let codes: Vec<String> =
                table.iter().map(|(_, code)| code.to_string()).collect();

            for (i, a) in codes.iter().enumerate() {
                assert!(!a.is_empty(), "empty code in table for {text:?}");
                for (j, b) in codes.iter().enumerate() {
                    if i != j {
                        assert!(
                            !b.starts_with(a.as_str()),
                            "{a} is a prefix of {b} for {text:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_deterministic_codes() {
        let freqs = count_frequencies("abracadabra", PairingMode::Single);
        let probs = build_probabilities(&freqs);

        let first = build_code(&probs);
        let second = build_code(&probs);

        assert_eq!(first.len(), second.len());
        for (symbol, code) in first.iter() {
            assert_eq!(second.get(&symbol), Some(code));
        }
    }

    #[test]
    fn test_tied_probabilities_keep_insertion_order() {
        // All symbols equally likely: sort must not shuffle them, so the
        // first-seen symbol lands in the left half with a 0-leading code.
        let table = code_for("dcba");
        assert!(code_str(&table, 'd').starts_with('0'));
        assert!(code_str(&table, 'a').starts_with('1'));
    }

    #[test]
    fn test_shorter_codes_for_likelier_symbols() {
        let table = code_for("aaaaaaaabbbbccde");
        let a = code_str(&table, 'a').len();
        let e = code_str(&table, 'e').len();
        assert!(a <= e, "likelier symbol got longer code ({a} > {e})");
    }

    #[test]
    fn test_average_length() {
        let freqs = count_frequencies("aaabbc", PairingMode::Single);
        let probs = build_probabilities(&freqs);
        let table = build_code(&probs);

        // 1/2 * 1 + 1/3 * 2 + 1/6 * 2 = 1.5
        assert!((table.average_length(&probs) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_distribution() {
        let table = code_for("");
        assert!(table.is_empty());
    }
}
