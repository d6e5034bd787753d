//! Common types for utterance classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AssentError;

/// Outcome of classifying one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// The utterance expresses agreement or a go-ahead.
    #[serde(rename = "肯定")]
    Affirmative,
    /// Anything that is not recognized as affirmative.
    #[serde(rename = "否定")]
    Negative,
}

impl Classification {
    pub fn from_affirmative(affirmative: bool) -> Self {
        if affirmative {
            Classification::Affirmative
        } else {
            Classification::Negative
        }
    }

    /// The literal written to reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Affirmative => "肯定",
            Classification::Negative => "否定",
        }
    }

    pub fn is_affirmative(&self) -> bool {
        matches!(self, Classification::Affirmative)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = AssentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "肯定" => Ok(Classification::Affirmative),
            "否定" => Ok(Classification::Negative),
            other => Err(AssentError::invalid_argument(format!(
                "unknown classification label '{other}'"
            ))),
        }
    }
}

/// Which matching pass produced a [`TermMatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Case-insensitive equality.
    Exact,
    /// Positional similarity at or above the threshold.
    Fuzzy,
}

/// The token/term pair an affirmative classification is attributed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermMatch {
    pub token: String,
    pub term: String,
    pub kind: MatchKind,
}

impl fmt::Display for TermMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            MatchKind::Exact => "exact",
            MatchKind::Fuzzy => "fuzzy",
        };
        write!(f, "'{}' ~ '{}' ({kind})", self.token, self.term)
    }
}
