//! Command line argument parsing for the assent CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_CORPUS_SIZE, DEFAULT_OUTPUT_PATH};
use crate::report::DEFAULT_SUMMARY_LIMIT;

/// assent - affirmative/negative utterance classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "assent")]
#[command(about = "Classify short utterances as affirmative or negative")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct AssentArgs {
    /// Verbosity level (1=normal, 2=verbose, 3=debug, 4=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl AssentArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Synthesize a test corpus, classify it and write a report
    Run(RunArgs),

    /// Classify the given utterances
    Classify(ClassifyArgs),

    /// Show the positional similarity of two strings
    Similarity(SimilarityArgs),

    /// Count labels in an existing report
    Stats(StatsArgs),
}

/// Arguments for a full pipeline run
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Number of utterances to synthesize
    #[arg(short = 'n', long, default_value_t = DEFAULT_CORPUS_SIZE)]
    pub count: usize,

    /// Similarity threshold for the fuzzy pass
    #[arg(short, long, default_value_t = crate::util::similarity::DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Report file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Seed for reproducible corpora (random when omitted)
    #[arg(short, long, env = "ASSENT_SEED")]
    pub seed: Option<u64>,

    /// Lexicon file (JSON)
    #[arg(short, long, value_name = "LEXICON_FILE")]
    pub lexicon: Option<PathBuf>,

    /// Number of examples shown in the summary
    #[arg(long, default_value_t = DEFAULT_SUMMARY_LIMIT)]
    pub summary: usize,

    /// Remove context phrases before classifying
    #[arg(long)]
    pub strip_context: bool,
}

/// Arguments for classifying utterances
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Utterances to classify
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,

    /// Similarity threshold for the fuzzy pass
    #[arg(short, long, default_value_t = crate::util::similarity::DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Lexicon file (JSON)
    #[arg(short, long, value_name = "LEXICON_FILE")]
    pub lexicon: Option<PathBuf>,

    /// Remove context phrases before classifying
    #[arg(long)]
    pub strip_context: bool,
}

/// Arguments for the similarity command
#[derive(Parser, Debug, Clone)]
pub struct SimilarityArgs {
    /// First string
    pub left: String,

    /// Second string
    pub right: String,

    /// Similarity threshold
    #[arg(short, long, default_value_t = crate::util::similarity::DEFAULT_THRESHOLD)]
    pub threshold: f64,
}

/// Arguments for report statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Report file to read
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_defaults() {
        let args = AssentArgs::parse_from(["assent", "run"]);
        assert_eq!(args.verbosity(), 1);
        match args.command {
            Command::Run(run) => {
                assert_eq!(run.count, 300);
                assert_eq!(run.threshold, 0.8);
                assert_eq!(run.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
                assert_eq!(run.summary, 10);
                assert!(!run.strip_context);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_classify_requires_text() {
        assert!(AssentArgs::try_parse_from(["assent", "classify"]).is_err());
        let argv = ["assent", "-q", "-f", "json", "classify", "好的", "OK"];
        let args = AssentArgs::try_parse_from(argv).unwrap();
        assert_eq!(args.verbosity(), 0);
        match args.command {
            Command::Classify(classify) => assert_eq!(classify.texts, vec!["好的", "OK"]),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
