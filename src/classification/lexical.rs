//! Lexical affirmative classifier.

use std::sync::Arc;

use log::{debug, trace};

use crate::analysis::{CharFilter, SpaceTokenizer, Tokenizer, Utterance};
use crate::util::similarity::{DEFAULT_THRESHOLD, is_similar};

use super::classifier::Classifier;
use super::lexicon::ReferenceTermSet;
use super::types::{Classification, MatchKind, TermMatch};

/// Classifies an utterance as affirmative when any of its tokens matches a
/// reference term.
///
/// Matching runs in two passes and stops at the first hit:
///
/// 1. exact: the token equals a term, ignoring case;
/// 2. fuzzy: the token is positionally similar to a term at `threshold`.
///
/// Tokens are tried in utterance order and, for each token, terms in
/// reference order. Empty tokens never match.
pub struct LexicalClassifier {
    terms: ReferenceTermSet,
    lowered_terms: Vec<String>,
    threshold: f64,
    tokenizer: Arc<dyn Tokenizer>,
    char_filter: Option<Arc<dyn CharFilter>>,
}

impl std::fmt::Debug for LexicalClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexicalClassifier")
            .field("terms", &self.terms)
            .field("threshold", &self.threshold)
            .field("tokenizer", &self.tokenizer.name())
            .field("char_filter", &self.char_filter.as_ref().map(|cf| cf.name()))
            .finish()
    }
}

impl LexicalClassifier {
    /// Create a classifier over `terms` with the default threshold and the
    /// space tokenizer.
    pub fn new(terms: ReferenceTermSet) -> Self {
        let lowered_terms = terms.iter().map(|term| term.to_lowercase()).collect();
        Self {
            terms,
            lowered_terms,
            threshold: DEFAULT_THRESHOLD,
            tokenizer: Arc::new(SpaceTokenizer::new()),
            char_filter: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Apply `char_filter` to raw text before tokenizing it in
    /// [`analyze`](Self::analyze).
    pub fn with_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filter = Some(char_filter);
        self
    }

    pub fn terms(&self) -> &ReferenceTermSet {
        &self.terms
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Filter and tokenize raw text.
    ///
    /// With a char filter the returned utterance holds the filtered text, so
    /// token offsets index into [`Utterance::text`].
    pub fn analyze(&self, text: &str) -> Utterance {
        match &self.char_filter {
            Some(char_filter) => {
                Utterance::analyze(&char_filter.filter(text), self.tokenizer.as_ref())
            }
            None => Utterance::analyze(text, self.tokenizer.as_ref()),
        }
    }

    /// Analyze and classify raw text.
    pub fn classify_text(&self, text: &str) -> Classification {
        self.classify(&self.analyze(text))
    }

    /// The first token/term pair that makes `utterance` affirmative, if any.
    pub fn find_match(&self, utterance: &Utterance) -> Option<TermMatch> {
        first_match(
            utterance,
            self.terms.terms(),
            &self.lowered_terms,
            self.threshold,
        )
    }
}

impl Classifier for LexicalClassifier {
    fn classify(&self, utterance: &Utterance) -> Classification {
        let found = self.find_match(utterance);
        match &found {
            Some(term_match) => debug!("'{}' => affirmative via {}", utterance, term_match),
            None => trace!("'{}' => negative, no term matched", utterance),
        }
        Classification::from_affirmative(found.is_some())
    }

    fn name(&self) -> &str {
        "lexical"
    }
}

/// Classify without building a [`LexicalClassifier`].
pub(crate) fn classify_with_threshold(
    utterance: &Utterance,
    terms: &ReferenceTermSet,
    threshold: f64,
) -> Classification {
    let lowered_terms: Vec<String> = terms.iter().map(|term| term.to_lowercase()).collect();
    let found = first_match(utterance, terms.terms(), &lowered_terms, threshold);
    Classification::from_affirmative(found.is_some())
}

/// Exact pass over all tokens, then fuzzy pass. `lowered_terms[i]` is
/// `terms[i]` lower-cased.
fn first_match(
    utterance: &Utterance,
    terms: &[String],
    lowered_terms: &[String],
    threshold: f64,
) -> Option<TermMatch> {
    let tokens = || utterance.token_texts().filter(|token| !token.is_empty());

    for token in tokens() {
        let lowered = token.to_lowercase();
        if let Some(index) = lowered_terms.iter().position(|term| *term == lowered) {
            return Some(TermMatch {
                token: token.to_string(),
                term: terms[index].clone(),
                kind: MatchKind::Exact,
            });
        }
    }

    for token in tokens() {
        if let Some(term) = terms.iter().find(|term| is_similar(token, term, threshold)) {
            return Some(TermMatch {
                token: token.to_string(),
                term: term.clone(),
                kind: MatchKind::Fuzzy,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ContextCharFilter, tokenize};

    fn classifier(terms: &[&str]) -> LexicalClassifier {
        LexicalClassifier::new(terms.iter().copied().collect())
    }

    #[test]
    fn test_exact_match_ignores_case() {
        let classifier = classifier(&["OK", "YES"]);
        assert_eq!(classifier.classify_text("ok then"), Classification::Affirmative);
        assert_eq!(classifier.classify_text("well Yes"), Classification::Affirmative);
        assert_eq!(classifier.classify_text("no way"), Classification::Negative);
    }

    #[test]
    fn test_exact_pass_wins_over_earlier_fuzzy_candidate() {
        // "开始烹饪吧" is fuzzy-similar to "开始烹饪", but "好的" is an exact hit
        let classifier = classifier(&["开始烹饪", "好的"]);
        let found = classifier.find_match(&tokenize("开始烹饪吧 好的")).unwrap();
        assert_eq!(found.kind, MatchKind::Exact);
        assert_eq!(found.term, "好的");
    }

    #[test]
    fn test_fuzzy_match_at_default_threshold() {
        let classifier = classifier(&["开始烹饪"]);
        let found = classifier.find_match(&tokenize("开始烹饪吧")).unwrap();
        assert_eq!(found.kind, MatchKind::Fuzzy);
        assert_eq!(found.token, "开始烹饪吧");
        assert_eq!(classifier.classify_text("开始烹饪吧"), Classification::Affirmative);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let strict = classifier(&["开始烹饪"]).with_threshold(1.0);
        assert_eq!(strict.classify_text("开始烹饪吧"), Classification::Negative);

        let loose = classifier(&["启动"]).with_threshold(0.5);
        assert_eq!(loose.classify_text("启动吧"), Classification::Affirmative);
    }

    #[test]
    fn test_shifted_token_is_not_matched() {
        let classifier = classifier(&["start"]);
        assert_eq!(classifier.classify_text("xstart"), Classification::Negative);
    }

    #[test]
    fn test_empty_tokens_never_match() {
        let classifier = classifier(&[""]).with_threshold(0.0);
        assert_eq!(classifier.classify_text("  "), Classification::Negative);
    }

    #[test]
    fn test_first_term_in_order_is_attributed() {
        let classifier = classifier(&["yes", "YES"]);
        let found = classifier.find_match(&tokenize("Yes")).unwrap();
        assert_eq!(found.term, "yes");
    }

    #[test]
    fn test_char_filter_strips_context_before_tokenizing() {
        let filter = Arc::new(ContextCharFilter::new(["听我的："]));
        let plain = classifier(&["启动吧"]);
        let filtered = classifier(&["启动吧"]).with_char_filter(filter);

        assert_eq!(plain.classify_text("听我的：启动吧"), Classification::Negative);
        assert_eq!(filtered.classify_text("听我的：启动吧"), Classification::Affirmative);
    }

    #[test]
    fn test_filtered_utterance_offsets_index_its_text() {
        let filter = Arc::new(ContextCharFilter::new(["听我的："]));
        let classifier = classifier(&["启动"]).with_char_filter(filter);

        let utterance = classifier.analyze("听我的：启动 吧");
        assert_eq!(utterance.text(), "启动 吧");
        for token in utterance.tokens() {
            assert_eq!(&utterance.text()[token.start_offset..token.end_offset], token.text);
        }
    }

    #[test]
    fn test_free_function_agrees_with_classifier() {
        let terms: ReferenceTermSet = ["好的", "OK", "开始烹饪"].into_iter().collect();
        let classifier = LexicalClassifier::new(terms.clone());
        let strict = LexicalClassifier::new(terms.clone()).with_threshold(1.0);
        for text in ["好的 开始吧", "ok", "开始烹饪吧", "不了，不用了", "a  b", ""] {
            let utterance = tokenize(text);
            assert_eq!(
                classify_with_threshold(&utterance, &terms, DEFAULT_THRESHOLD),
                classifier.classify(&utterance),
                "text: {text:?}"
            );
            assert_eq!(
                classify_with_threshold(&utterance, &terms, 1.0),
                strict.classify(&utterance),
                "text: {text:?}"
            );
        }
    }
}
