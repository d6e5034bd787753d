//! Classifier trait definition.

use crate::analysis::Utterance;

use super::types::Classification;

/// Utterance classifier trait.
///
/// Classification is total: every utterance yields exactly one label, and
/// the label depends only on the utterance and the classifier's
/// configuration.
pub trait Classifier: Send + Sync {
    /// Classify an already tokenized utterance.
    fn classify(&self, utterance: &Utterance) -> Classification;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
