//! End-to-end synthesize → classify → report run.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analysis::ContextCharFilter;
use crate::classification::LexicalClassifier;
use crate::config::PipelineConfig;
use crate::corpus::{Corpus, CorpusSynthesizer, LabelCounts, LabeledExample};
use crate::error::{AssentError, Result};
use crate::report::Reporter;

/// What a completed run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutcome {
    pub examples: Corpus,
    pub counts: LabelCounts,
    pub output_path: PathBuf,
}

/// A configured pipeline.
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    synthesizer: CorpusSynthesizer,
    classifier: LexicalClassifier,
    reporter: Reporter,
}

impl Pipeline {
    /// Validate `config` and build the pipeline stages from it.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;

        let lexicon = &config.lexicon;
        let synthesizer =
            CorpusSynthesizer::new(lexicon.seed_phrases.clone(), lexicon.context_phrases.clone())?;

        let mut classifier = LexicalClassifier::new(lexicon.affirmative_terms.clone())
            .with_threshold(config.threshold);
        if config.strip_context {
            let filter = ContextCharFilter::new(lexicon.context_phrases.iter().cloned());
            classifier = classifier.with_char_filter(Arc::new(filter));
        }

        let reporter =
            Reporter::new(config.output_path.clone()).with_summary_limit(config.summary_limit);

        Ok(Self {
            config,
            synthesizer,
            classifier,
            reporter,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn classifier(&self) -> &LexicalClassifier {
        &self.classifier
    }

    /// Generate the configured number of utterances.
    pub fn synthesize<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        self.synthesizer.generate(self.config.corpus_size, rng)
    }

    /// Classify each utterance, keeping input order.
    pub fn classify_corpus(&self, utterances: Vec<String>) -> Corpus {
        utterances
            .into_iter()
            .map(|text| {
                let label = self.classifier.classify_text(&text);
                LabeledExample::new(text, label)
            })
            .collect()
    }

    /// Run all stages, writing the summary to `console`.
    ///
    /// If the report cannot be written the error is
    /// [`AssentError::ReportWrite`], which still carries the classified
    /// examples.
    pub fn run<R, W>(&self, rng: &mut R, console: &mut W) -> Result<PipelineOutcome>
    where
        R: Rng + ?Sized,
        W: Write,
    {
        let utterances = self.synthesize(rng);
        let examples = self.classify_corpus(utterances);
        let counts = LabelCounts::from_examples(&examples);
        info!(
            "Classified {} utterances: {} affirmative, {} negative",
            counts.total(),
            counts.affirmative,
            counts.negative
        );

        // the summary is already on the console when the write fails
        if let Err(err) = self.reporter.report(&examples, console) {
            return Err(match err {
                AssentError::Io(source) => AssentError::ReportWrite { source, examples },
                other => other,
            });
        }

        Ok(PipelineOutcome {
            examples,
            counts,
            output_path: self.reporter.output_path().to_path_buf(),
        })
    }
}
