//! Labeled examples and label tallies.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classification::Classification;

/// An utterance's original text paired with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledExample {
    pub text: String,
    pub label: Classification,
}

impl LabeledExample {
    pub fn new<S: Into<String>>(text: S, label: Classification) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

impl fmt::Display for LabeledExample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.text, self.label)
    }
}

/// Number of examples per label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    pub affirmative: usize,
    pub negative: usize,
}

impl LabelCounts {
    pub fn from_examples(examples: &[LabeledExample]) -> Self {
        examples
            .iter()
            .fold(LabelCounts::default(), |mut counts, example| {
                counts.add(example.label);
                counts
            })
    }

    pub fn add(&mut self, label: Classification) {
        match label {
            Classification::Affirmative => self.affirmative += 1,
            Classification::Negative => self.negative += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.affirmative + self.negative
    }

    /// Share of affirmative examples, 0.0 for an empty tally.
    pub fn affirmative_ratio(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.affirmative as f64 / self.total() as f64
        }
    }
}
