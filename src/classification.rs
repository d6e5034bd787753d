//! Binary affirmative/negative classification of utterances.
//!
//! # Architecture
//!
//! - `Classifier` trait: Common interface for utterance classifiers
//! - `LexicalClassifier`: Exact, then positional-similarity, matching of
//!   tokens against a [`ReferenceTermSet`]
//! - `Classification`: The two possible outcomes
//!
//! # Example
//!
//! ```
//! use assent::analysis::tokenize;
//! use assent::classification::{self, Classification, ReferenceTermSet};
//!
//! let terms = ReferenceTermSet::from(vec!["好的", "OK"]);
//! let label = classification::classify(&tokenize("ok 开始"), &terms);
//! assert_eq!(label, Classification::Affirmative);
//! ```

mod classifier;
mod lexical;
mod lexicon;
mod types;

pub use classifier::Classifier;
pub use lexical::LexicalClassifier;
pub use lexicon::ReferenceTermSet;
pub use types::{Classification, MatchKind, TermMatch};

use crate::analysis::Utterance;
use crate::util::similarity::DEFAULT_THRESHOLD;

/// Classify `utterance` against `terms` at the default similarity threshold.
pub fn classify(utterance: &Utterance, terms: &ReferenceTermSet) -> Classification {
    lexical::classify_with_threshold(utterance, terms, DEFAULT_THRESHOLD)
}
