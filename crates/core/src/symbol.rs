//! Symbols and text segmentation.
//!
//! A symbol is the atomic unit being coded: one character, or one disjoint
//! pair of consecutive characters. Both the frequency counter and the
//! encoder must partition the text identically, so the segmentation rule
//! lives here and is shared.
//!
//! # Pairing Rule
//!
//! Pair mode takes non-overlapping 2-character windows starting at index 0
//! (chars 0-1, 2-3, 4-5, ...). An odd-length text leaves one unpaired final
//! character, which is completed with the pad character (a space) to form a
//! full pair. The decoder strips that pad using the original text length as
//! context (see `codec`).

use std::fmt;

/// Character appended to an unpaired trailing character in pair mode.
pub const PAD_CHAR: char = ' ';

/// How the input text is partitioned into symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingMode {
    /// Each character is one symbol
    Single,
    /// Disjoint consecutive character pairs, trailing char padded with space
    Pair,
}

/// An atomic code unit: a single character or a character pair.
///
/// Compared by exact value equality; no case folding or normalization.
/// `Ord` gives reports a stable symbol ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Char(char),
    Pair(char, char),
}

impl Symbol {
    /// Append this symbol's characters to `out`.
    pub fn write_to(&self, out: &mut String) {
        match *self {
            Symbol::Char(c) => out.push(c),
            Symbol::Pair(a, b) => {
                out.push(a);
                out.push(b);
            }
        }
    }

    /// The symbol's characters as an owned string.
    pub fn as_text(&self) -> String {
        let mut s = String::new();
        self.write_to(&mut s);
        s
    }

    /// True for a pair whose second character is the pad.
    pub fn is_padded_pair(&self) -> bool {
        matches!(*self, Symbol::Pair(_, b) if b == PAD_CHAR)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Symbol::Char(c) => write!(f, "{c}"),
            Symbol::Pair(a, b) => write!(f, "{a}{b}"),
        }
    }
}

/// Partition `text` into symbols under the given mode.
///
/// Single mode yields one symbol per `char`. Pair mode yields
/// `ceil(char_count / 2)` symbols, padding an unpaired trailing character
/// with [`PAD_CHAR`]. Empty text yields no symbols.
pub fn segment(text: &str, mode: PairingMode) -> Vec<Symbol> {
    match mode {
        PairingMode::Single => text.chars().map(Symbol::Char).collect(),
        PairingMode::Pair => {
            let chars: Vec<char> = text.chars().collect();
            chars
                .chunks(2)
                .map(|pair| match *pair {
                    [a, b] => Symbol::Pair(a, b),
                    [a] => Symbol::Pair(a, PAD_CHAR),
                    _ => unreachable!("chunks(2) yields 1 or 2 chars"),
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_single() {
        let symbols = segment("abc", PairingMode::Single);
        assert_eq!(
            symbols,
            vec![Symbol::Char('a'), Symbol::Char('b'), Symbol::Char('c')]
        );
    }

    #[test]
    fn test_segment_pair_even() {
        let symbols = segment("abcd", PairingMode::Pair);
        assert_eq!(symbols, vec![Symbol::Pair('a', 'b'), Symbol::Pair('c', 'd')]);
    }

    #[test]
    fn test_segment_pair_odd_pads_with_space() {
        let symbols = segment("abc", PairingMode::Pair);
        assert_eq!(symbols, vec![Symbol::Pair('a', 'b'), Symbol::Pair('c', ' ')]);
        assert!(symbols[1].is_padded_pair());
    }

    #[test]
    fn test_segment_empty() {
        assert!(segment("", PairingMode::Single).is_empty());
        assert!(segment("", PairingMode::Pair).is_empty());
    }

    #[test]
    fn test_segment_single_char_pair_mode() {
        let symbols = segment("x", PairingMode::Pair);
        assert_eq!(symbols, vec![Symbol::Pair('x', ' ')]);
    }

    #[test]
    fn test_segment_non_ascii() {
        let symbols = segment("привет", PairingMode::Pair);
        assert_eq!(symbols.len(), 3);
        assert_eq!(symbols[0], Symbol::Pair('п', 'р'));
    }

    #[test]
    fn test_symbol_text() {
        assert_eq!(Symbol::Char('q').as_text(), "q");
        assert_eq!(Symbol::Pair('a', ' ').as_text(), "a ");
    }
}
