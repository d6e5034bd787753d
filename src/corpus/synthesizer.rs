//! Seed-phrase corpus synthesizer.

use log::debug;
use rand::Rng;

use crate::error::{AssentError, Result};

/// Chance that a sampled phrase gets a context prefix.
pub const DEFAULT_PREFIX_PROBABILITY: f64 = 0.5;

/// Generates utterances from seed phrases and optional context prefixes.
#[derive(Debug, Clone)]
pub struct CorpusSynthesizer {
    seed_phrases: Vec<String>,
    context_phrases: Vec<String>,
}

impl CorpusSynthesizer {
    /// Create a synthesizer.
    ///
    /// Fails with [`AssentError::InvalidArgument`] when `seed_phrases` is
    /// empty. An empty `context_phrases` means phrases are never prefixed.
    pub fn new(seed_phrases: Vec<String>, context_phrases: Vec<String>) -> Result<Self> {
        if seed_phrases.is_empty() {
            return Err(AssentError::invalid_argument(
                "seed phrase set must not be empty",
            ));
        }
        Ok(Self {
            seed_phrases,
            context_phrases,
        })
    }

    pub fn seed_phrases(&self) -> &[String] {
        &self.seed_phrases
    }

    pub fn context_phrases(&self) -> &[String] {
        &self.context_phrases
    }

    /// Generate one utterance.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let seed = &self.seed_phrases[rng.random_range(0..self.seed_phrases.len())];
        if self.context_phrases.is_empty() || !rng.random_bool(DEFAULT_PREFIX_PROBABILITY) {
            return seed.clone();
        }

        let context = &self.context_phrases[rng.random_range(0..self.context_phrases.len())];
        let mut phrase = String::with_capacity(context.len() + seed.len());
        phrase.push_str(context);
        phrase.push_str(seed);
        phrase
    }

    /// Generate exactly `count` utterances.
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String> {
        debug!(
            "Synthesizing {count} utterances from {} seeds and {} contexts",
            self.seed_phrases.len(),
            self.context_phrases.len()
        );
        (0..count).map(|_| self.sample(rng)).collect()
    }
}

/// Generate `count` utterances from borrowed phrase lists.
pub fn synthesize<R: Rng + ?Sized>(
    seed_phrases: &[String],
    count: usize,
    context_phrases: &[String],
    rng: &mut R,
) -> Result<Vec<String>> {
    let synthesizer = CorpusSynthesizer::new(seed_phrases.to_vec(), context_phrases.to_vec())?;
    Ok(synthesizer.generate(count, rng))
}
