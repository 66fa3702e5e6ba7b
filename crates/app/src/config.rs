//! Configuration for the shannon-fano application.
//!
//! Handles parsing command-line arguments and generating sensible defaults
//! (including a randomized sample text that is reproducible with a seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, analyzing a generated sample
//! text. All defaults are printed so runs are reproducible.

use shannon_fano_core::symbol::PairingMode;
use std::path::PathBuf;

/// Which analyses to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Single characters only
    Single,
    /// Character pairs only
    Pair,
    /// Both, with a comparison (the default)
    Both,
}

impl ModeArg {
    /// The pairing modes this selection expands to.
    pub fn modes(self) -> Vec<PairingMode> {
        match self {
            ModeArg::Single => vec![PairingMode::Single],
            ModeArg::Pair => vec![PairingMode::Pair],
            ModeArg::Both => vec![PairingMode::Single, PairingMode::Pair],
        }
    }
}

/// Complete configuration for an analysis run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Input ===
    /// Literal text to analyze (highest priority)
    pub text: Option<String>,

    /// Input file to read text from
    pub input_file: Option<PathBuf>,

    /// Random seed for generated sample text
    pub seed: u64,

    /// Length of generated sample text in characters
    pub sample_chars: usize,

    // === Analysis ===
    /// Which pairing modes to run
    pub mode: ModeArg,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the per-symbol code table
    pub print_table: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no input is provided, a sample text is generated using a
    /// time-based seed. If --seed is provided, generation is fully
    /// deterministic.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut text: Option<String> = None;
        let mut input_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_chars: Option<usize> = None;
        let mut mode = ModeArg::Both;
        let mut print_config = false;
        let mut print_table = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--text" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--text requires a string".to_string());
                    }
                    text = Some(args[i].clone());
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--mode" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--mode requires single, pair, or both".to_string());
                    }
                    mode = match args[i].as_str() {
                        "single" => ModeArg::Single,
                        "pair" => ModeArg::Pair,
                        "both" => ModeArg::Both,
                        other => return Err(format!("invalid mode: {other}")),
                    };
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-chars" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-chars requires a number".to_string());
                    }
                    sample_chars = Some(args[i].parse().map_err(|_| "invalid sample-chars")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-table" => {
                    print_table = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis() as u64
        });

        Ok(Config {
            text,
            input_file,
            seed,
            sample_chars: sample_chars.unwrap_or(400),
            mode,
            print_config,
            print_table,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match (&self.text, &self.input_file) {
            (Some(_), _) => println!("Input: literal text (--text)"),
            (None, Some(path)) => println!("Input: file {:?}", path),
            (None, None) => {
                println!("Input: generated sample");
                println!("Seed: {}", self.seed);
                println!("Sample length: {} chars", self.sample_chars);
            }
        }
        println!("Mode: {:?}", self.mode);
        println!();
    }
}

fn print_help() {
    println!("shannon-fano: text analysis and Shannon-Fano prefix coding");
    println!();
    println!("USAGE:");
    println!("    shannon-fano [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --text <STRING>        Analyze this literal text");
    println!("    --in <PATH>            Analyze the contents of a file");
    println!("    --mode <MODE>          single, pair, or both (default: both)");
    println!();
    println!("    --seed <N>             Seed for generated sample text");
    println!("    --sample-chars <N>     Generated sample length (default: 400)");
    println!();
    println!("    --print-config         Print resolved configuration");
    println!("    --no-table             Don't print the per-symbol code table");
    println!("    --help, -h             Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    shannon-fano                          # Analyze a random sample");
    println!("    shannon-fano --seed 42                # Deterministic sample");
    println!("    shannon-fano --text 'hello world'     # Analyze a literal");
    println!("    shannon-fano --in essay.txt --mode pair");
    println!();
}
