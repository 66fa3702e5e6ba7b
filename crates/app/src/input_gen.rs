//! Sample text generation for analysis runs without input.
//!
//! When no text or input file is specified, we generate a text with
//! interesting coding characteristics: a skewed letter distribution with
//! word and sentence structure, so the resulting symbol probabilities are
//! non-uniform and the Shannon-Fano code has something to exploit.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Letters weighted roughly like English text. Repetition in the slice is
/// the weighting: sampling an index uniformly skews toward early letters.
const WEIGHTED_LETTERS: &[char] = &[
    'e', 'e', 'e', 'e', 'e', 'e', 't', 't', 't', 't', 't', 'a', 'a', 'a', 'a', 'o', 'o', 'o', 'o',
    'i', 'i', 'i', 'n', 'n', 'n', 's', 's', 'h', 'h', 'r', 'r', 'd', 'l', 'u', 'c', 'm', 'w', 'f',
    'g', 'y', 'p', 'b', 'v', 'k',
];

/// Generate a sample text with a skewed symbol distribution.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `chars`: exact length of the generated text in characters
///
/// # Returns
/// A text of word-like runs separated by spaces, with occasional periods.
pub fn generate_sample_text(seed: u64, chars: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text = String::with_capacity(chars);

    let mut produced = 0usize;
    let mut word_len = 0usize;
    let mut target_len = rng.gen_range(3..=9);

    while produced < chars {
        if word_len >= target_len {
            // End the word; occasionally end a sentence
            if rng.gen_range(0..8) == 0 && produced + 1 < chars {
                text.push('.');
                produced += 1;
            }
            text.push(' ');
            produced += 1;
            word_len = 0;
            target_len = rng.gen_range(3..=9);
        } else {
            let idx = rng.gen_range(0..WEIGHTED_LETTERS.len());
            text.push(WEIGHTED_LETTERS[idx]);
            produced += 1;
            word_len += 1;
        }
    }

    text
}
