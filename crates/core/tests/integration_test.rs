//! Integration tests for the full shannon-fano pipeline.
//!
//! These tests verify end-to-end behavior: text -> frequencies ->
//! probabilities -> code table -> encoded bits -> decoded text, with
//! verification that the decoded output matches the input.

use shannon_fano_core::{
    bits::BitVec,
    codec::{decode, encode},
    fano::build_code,
    freq::count_frequencies,
    model::build_probabilities,
    report::analyze,
    symbol::{PairingMode, Symbol},
};

/// Encode and decode `text` through a freshly built table.
fn round_trip(text: &str, mode: PairingMode) -> String {
    let freqs = count_frequencies(text, mode);
    let probs = build_probabilities(&freqs);
    let codes = build_code(&probs);

    let bits = encode(text, &codes, mode).expect("encode failed");
    decode(&bits, &codes, mode, text.chars().count()).expect("decode failed")
}

#[test]
fn test_round_trip_both_modes() {
    let texts = [
        "hello",
        "hello world",
        "aaabbc",
        "the quick brown fox jumps over the lazy dog",
        "mississippi",
        "Hello, World! 123",
        "aaaabbbbcccc",
        "abcdef",
        "aaaaabbbccd",
    ];

    for text in texts {
        for mode in [PairingMode::Single, PairingMode::Pair] {
            assert_eq!(round_trip(text, mode), text, "mode {mode:?}");
        }
    }
}

#[test]
fn test_round_trip_cyrillic() {
    for text in ["привет", "привет мир"] {
        for mode in [PairingMode::Single, PairingMode::Pair] {
            assert_eq!(round_trip(text, mode), text);
        }
    }
}

#[test]
fn test_pair_mode_odd_length_strips_pad() {
    // "abc" segments to ["ab", "c "]; the decoder must reconstruct exactly
    // "abc", not "abc "
    let freqs = count_frequencies("abc", PairingMode::Pair);
    let symbols: Vec<Symbol> = freqs.iter().map(|(s, _)| s).collect();
    assert_eq!(symbols, vec![Symbol::Pair('a', 'b'), Symbol::Pair('c', ' ')]);

    assert_eq!(round_trip("abc", PairingMode::Pair), "abc");
}

#[test]
fn test_single_symbol_alphabet_conventions() {
    let analysis = analyze("aaaaa", PairingMode::Single).unwrap();

    assert_eq!(analysis.frequencies.get(&Symbol::Char('a')), 5);
    assert!((analysis.probabilities.get(&Symbol::Char('a')) - 1.0).abs() < 1e-9);
    assert_eq!(analysis.entropy, 0.0);
    assert_eq!(
        analysis.codes.get(&Symbol::Char('a')).unwrap().to_string(),
        "0"
    );
    assert_eq!(analysis.encoded_bits, 5);
    assert_eq!(analysis.decoded_text, "aaaaa");
}

#[test]
fn test_known_statistics() {
    let analysis = analyze("aaabbc", PairingMode::Single).unwrap();

    assert_eq!(analysis.frequencies.len(), 3);
    assert!((analysis.entropy - 1.4591).abs() < 1e-3);
    assert_eq!(analysis.uniform_code_length, 2);
    assert!((analysis.average_code_length - 1.5).abs() < 1e-9);
    assert!((analysis.compression_efficiency() - 97.28).abs() < 0.1);
}

#[test]
fn test_prefix_free_across_inputs() {
    let texts = [
        "hello world",
        "a bee cee dee",
        "such a long text with many different characters, 0123456789!?",
        "zzzzzzzzzy",
    ];

    for text in texts {
        for mode in [PairingMode::Single, PairingMode::Pair] {
            let freqs = count_frequencies(text, mode);
            let codes = build_code(&build_probabilities(&freqs));

            let rendered: Vec<String> =
                codes.iter().map(|(_, code)| code.to_string()).collect();
            for (i, a) in rendered.iter().enumerate() {
                for (j, b) in rendered.iter().enumerate() {
                    if i != j {
                        assert!(
                            !b.starts_with(a.as_str()),
                            "{a} prefixes {b} ({text:?}, {mode:?})"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_entropy_within_uniform_bound() {
    for text in ["hello world", "aaabbc", "abcdefgh", "to be or not to be"] {
        let analysis = analyze(text, PairingMode::Single).unwrap();
        assert!(analysis.entropy >= 0.0);
        assert!(analysis.entropy <= f64::from(analysis.uniform_code_length));
    }
}

#[test]
fn test_deterministic_codes_across_runs() {
    let text = "repeatable deterministic output";
    let first = analyze(text, PairingMode::Single).unwrap();
    let second = analyze(text, PairingMode::Single).unwrap();

    assert_eq!(first.encoded_bits, second.encoded_bits);
    for (symbol, code) in first.codes.iter() {
        assert_eq!(second.codes.get(&symbol), Some(code));
    }
}

#[test]
fn test_corrupted_bitstream_rejected() {
    let text = "some moderately interesting text";
    let freqs = count_frequencies(text, PairingMode::Single);
    let codes = build_code(&build_probabilities(&freqs));
    let bits = encode(text, &codes, PairingMode::Single).unwrap();

    // Truncating mid-code must fail rather than silently shorten the text
    let truncated: BitVec = bits.iter().take(bits.len() - 1).collect();
    let result = decode(&truncated, &codes, PairingMode::Single, text.len());
    assert!(result.is_err(), "truncated stream decoded successfully");
}

#[test]
fn test_foreign_table_encode_rejected() {
    let codes = build_code(&build_probabilities(&count_frequencies(
        "abc",
        PairingMode::Single,
    )));
    assert!(encode("abcd", &codes, PairingMode::Single).is_err());
}

#[test]
fn test_pair_mode_usually_fewer_symbols() {
    let text = "the quick brown fox jumps over the lazy dog";
    let single = analyze(text, PairingMode::Single).unwrap();
    let pairs = analyze(text, PairingMode::Pair).unwrap();

    assert_eq!(single.frequencies.total(), 43);
    assert_eq!(pairs.frequencies.total(), 22);

    // Both must still round-trip
    assert_eq!(single.decoded_text, text);
    assert_eq!(pairs.decoded_text, text);
}
