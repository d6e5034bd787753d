//! Labeled test corpus synthesis.
//!
//! A corpus is produced by sampling seed phrases with replacement and, on
//! half of the draws, gluing a conversational lead-in phrase directly in
//! front of the sample. The random source is always passed in, so seeded
//! generators give reproducible corpora.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use assent::corpus::synthesize;
//!
//! let seeds = vec!["启动吧".to_string(), "不用了".to_string()];
//! let contexts = vec!["听我的：".to_string()];
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let phrases = synthesize(&seeds, 5, &contexts, &mut rng).unwrap();
//! assert_eq!(phrases.len(), 5);
//! ```

pub mod example;
pub mod synthesizer;

pub use example::{LabelCounts, LabeledExample};
pub use synthesizer::{CorpusSynthesizer, synthesize};

/// An ordered, in-memory sequence of labeled examples.
pub type Corpus = Vec<LabeledExample>;
