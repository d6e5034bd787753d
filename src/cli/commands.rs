//! Command implementations for the assent CLI.

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::analysis::ContextCharFilter;
use crate::classification::{Classifier, LexicalClassifier};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{LexiconConfig, PipelineConfig, validate_threshold};
use crate::corpus::LabelCounts;
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::report::read_report;
use crate::util::similarity::{is_similar, positional_ratio};

/// Execute a CLI command.
pub fn execute_command(args: AssentArgs) -> Result<()> {
    match &args.command {
        Command::Run(run_args) => run_pipeline(run_args.clone(), &args),
        Command::Classify(classify_args) => classify_texts(classify_args.clone(), &args),
        Command::Similarity(similarity_args) => show_similarity(similarity_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

fn load_lexicon(path: Option<&Path>) -> Result<LexiconConfig> {
    match path {
        Some(path) => {
            info!("Loading lexicon from: {}", path.display());
            LexiconConfig::from_file(path)
        }
        None => Ok(LexiconConfig::default()),
    }
}

/// Synthesize, classify and report.
fn run_pipeline(args: RunArgs, cli_args: &AssentArgs) -> Result<()> {
    let config = PipelineConfig::default()
        .with_lexicon(load_lexicon(args.lexicon.as_deref())?)
        .with_corpus_size(args.count)
        .with_threshold(args.threshold)
        .with_output_path(args.output)
        .with_summary_limit(args.summary)
        .with_strip_context(args.strip_context);
    let pipeline = Pipeline::new(config)?;

    let start_time = Instant::now();
    let mut rng = match args.seed {
        Some(seed) => {
            debug!("Using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_rng(&mut rand::rng()),
    };

    // the console summary is human output; keep stdout clean for JSON
    let result = match cli_args.output_format {
        OutputFormat::Human if cli_args.verbosity() > 0 => {
            pipeline.run(&mut rng, &mut io::stdout().lock())
        }
        _ => pipeline.run(&mut rng, &mut io::sink()),
    };
    let outcome = result.inspect_err(|err| {
        if let Some(examples) = err.examples() {
            let counts = LabelCounts::from_examples(examples);
            warn!(
                "Report not written; {} classified ({} affirmative, {} negative)",
                counts.total(),
                counts.affirmative,
                counts.negative
            );
        }
    })?;
    let duration = start_time.elapsed();

    output_result(
        &RunResult {
            output_path: outcome.output_path.to_string_lossy().to_string(),
            counts: outcome.counts,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Classify each argument.
fn classify_texts(args: ClassifyArgs, cli_args: &AssentArgs) -> Result<()> {
    validate_threshold(args.threshold)?;
    let lexicon = load_lexicon(args.lexicon.as_deref())?;

    let mut classifier =
        LexicalClassifier::new(lexicon.affirmative_terms.clone()).with_threshold(args.threshold);
    if args.strip_context {
        classifier = classifier.with_char_filter(Arc::new(ContextCharFilter::new(
            lexicon.context_phrases.iter().cloned(),
        )));
    }

    let results: Vec<ClassifyResult> = args
        .texts
        .into_iter()
        .map(|text| {
            let utterance = classifier.analyze(&text);
            ClassifyResult {
                label: classifier.classify(&utterance),
                matched: classifier.find_match(&utterance),
                text,
            }
        })
        .collect();

    output_result(&results, cli_args)
}

/// Print the positional similarity of two strings.
fn show_similarity(args: SimilarityArgs, cli_args: &AssentArgs) -> Result<()> {
    let result = SimilarityResult {
        ratio: positional_ratio(&args.left, &args.right),
        similar: is_similar(&args.left, &args.right, args.threshold),
        threshold: args.threshold,
        left: args.left,
        right: args.right,
    };
    output_result(&result, cli_args)
}

/// Count labels in a report file.
fn show_stats(args: StatsArgs, cli_args: &AssentArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Reading report: {}", args.report.display());
    }
    let examples = read_report(&args.report)?;
    let counts = LabelCounts::from_examples(&examples);

    output_result(
        &ReportStats {
            path: args.report.to_string_lossy().to_string(),
            affirmative_ratio: counts.affirmative_ratio(),
            counts,
        },
        cli_args,
    )
}
