//! Lexicon and pipeline configuration.
//!
//! The lexicon (affirmative reference terms, seed phrases and context
//! phrases) is plain data. [`LexiconConfig::default`] carries a built-in
//! vocabulary for confirming a kitchen appliance start; any other vocabulary
//! can be loaded from JSON:
//!
//! ```json
//! {
//!   "affirmative_terms": ["yes", "ok", "sure"],
//!   "seed_phrases": ["yes please", "no thanks"],
//!   "context_phrases": ["well, "]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classification::ReferenceTermSet;
use crate::error::{AssentError, Result};
use crate::report::DEFAULT_SUMMARY_LIMIT;
use crate::util::similarity::DEFAULT_THRESHOLD;

const AFFIRMATIVE_TERMS: &[&str] = &[
    "要",
    "需要",
    "是",
    "好的",
    "好吧",
    "行",
    "成",
    "确定",
    "确认",
    "可以",
    "当然",
    "OK",
    "YES",
    "启动",
    "开始",
    "启动烹饪",
    "继续",
    "妥",
    "安排",
    "直接开始",
    "马上",
    "运行",
];

const AFFIRMATIVE_PHRASES: &[&str] = &[
    "好的，开始吧",
    "启动烹饪",
    "是的，马上开始",
    "确认开始",
    "当然启动",
    "可以，现在就运行",
    "搞起来，启动吧",
    "OK，启动烹饪",
    "来吧，启动",
    "准备好了，开始吧",
    "直接运行吧",
    "启动吧",
];

const NEGATIVE_PHRASES: &[&str] = &[
    "不了，不用了",
    "我还没准备好",
    "先等等吧",
    "不用启动",
    "暂时先别开始",
    "不需要烹饪",
    "取消吧",
    "我不想启动",
    "这个就先算了",
    "不开始",
    "等会再启动",
    "暂时不要",
    "不用搞",
    "否定，不启动",
];

const CONTEXT_PHRASES: &[&str] = &[
    "我觉得可以这样：",
    "确认一下，我说的是：",
    "实际上是这样的：",
    "现在我们可以这样处理：",
    "听我的：",
    "对了，还有：",
    "可以确认，现在开始：",
    "简单来说：",
    "如果你问我的话：",
    "具体情况是这样的：",
];

/// Default report file name.
pub const DEFAULT_OUTPUT_PATH: &str = "microwave_test_sentences_combined.txt";

/// Default number of synthesized utterances per run.
pub const DEFAULT_CORPUS_SIZE: usize = 300;

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Vocabulary used for classification and corpus synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Reference terms signaling affirmative intent, in attribution order.
    pub affirmative_terms: ReferenceTermSet,
    /// Phrases the synthesizer samples from.
    pub seed_phrases: Vec<String>,
    /// Lead-in phrases the synthesizer may prepend.
    pub context_phrases: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        let mut seed_phrases = owned(AFFIRMATIVE_PHRASES);
        seed_phrases.extend(owned(NEGATIVE_PHRASES));
        Self {
            affirmative_terms: AFFIRMATIVE_TERMS.iter().copied().collect(),
            seed_phrases,
            context_phrases: owned(CONTEXT_PHRASES),
        }
    }
}

impl LexiconConfig {
    /// Load a lexicon from a JSON file. Missing fields fall back to the
    /// built-in vocabulary.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let lexicon: LexiconConfig = serde_json::from_str(content)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    pub fn validate(&self) -> Result<()> {
        if self.affirmative_terms.is_empty() {
            return Err(AssentError::config("affirmative_terms must not be empty"));
        }
        if self.affirmative_terms.iter().any(|term| term.is_empty()) {
            return Err(AssentError::config("affirmative_terms must not contain empty terms"));
        }
        if self.seed_phrases.is_empty() {
            return Err(AssentError::config("seed_phrases must not be empty"));
        }
        Ok(())
    }
}

/// Parameters of one synthesize → classify → report run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub lexicon: LexiconConfig,
    pub corpus_size: usize,
    pub threshold: f64,
    pub output_path: PathBuf,
    pub summary_limit: usize,
    /// Remove context phrases from utterances before classifying them.
    pub strip_context: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            lexicon: LexiconConfig::default(),
            corpus_size: DEFAULT_CORPUS_SIZE,
            threshold: DEFAULT_THRESHOLD,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            summary_limit: DEFAULT_SUMMARY_LIMIT,
            strip_context: false,
        }
    }
}

impl PipelineConfig {
    pub fn with_lexicon(mut self, lexicon: LexiconConfig) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_corpus_size(mut self, corpus_size: usize) -> Self {
        self.corpus_size = corpus_size;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_output_path<P: Into<PathBuf>>(mut self, output_path: P) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_summary_limit(mut self, summary_limit: usize) -> Self {
        self.summary_limit = summary_limit;
        self
    }

    pub fn with_strip_context(mut self, strip_context: bool) -> Self {
        self.strip_context = strip_context;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold)?;
        self.lexicon.validate()
    }
}

/// Reject thresholds outside `[0, 1]`, including NaN.
pub fn validate_threshold(threshold: f64) -> Result<()> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(AssentError::invalid_argument(format!(
            "threshold must be within [0, 1], got {threshold}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon_is_valid() {
        let lexicon = LexiconConfig::default();
        lexicon.validate().unwrap();
        assert_eq!(lexicon.affirmative_terms.len(), 22);
        assert_eq!(lexicon.seed_phrases.len(), 26);
        assert_eq!(lexicon.seed_phrases[11], "启动吧");
        assert_eq!(lexicon.seed_phrases[12], "不了，不用了");
        assert_eq!(lexicon.context_phrases.len(), 10);
        assert_eq!(lexicon.affirmative_terms.terms()[0], "要");
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let lexicon = LexiconConfig::from_json(r#"{"affirmative_terms": ["yes"]}"#).unwrap();
        assert_eq!(lexicon.affirmative_terms.terms(), &["yes"]);
        assert_eq!(lexicon.seed_phrases, LexiconConfig::default().seed_phrases);
    }

    #[test]
    fn test_rejects_unusable_lexicons() {
        assert!(matches!(
            LexiconConfig::from_json(r#"{"affirmative_terms": []}"#),
            Err(AssentError::Config(_))
        ));
        assert!(matches!(
            LexiconConfig::from_json(r#"{"affirmative_terms": ["ok", ""]}"#),
            Err(AssentError::Config(_))
        ));
        assert!(matches!(
            LexiconConfig::from_json(r#"{"seed_phrases": []}"#),
            Err(AssentError::Config(_))
        ));
        assert!(matches!(
            LexiconConfig::from_json("not json"),
            Err(AssentError::Json(_))
        ));
    }

    #[test]
    fn test_threshold_validation() {
        assert!(validate_threshold(0.0).is_ok());
        assert!(validate_threshold(0.8).is_ok());
        assert!(validate_threshold(1.0).is_ok());
        assert!(validate_threshold(1.5).is_err());
        assert!(validate_threshold(-0.1).is_err());
        assert!(validate_threshold(f64::NAN).is_err());
        assert!(PipelineConfig::default().with_threshold(2.0).validate().is_err());
    }
}
