//! Text analysis for utterance classification.
//!
//! Analysis turns raw text into an [`Utterance`]: an optional char filter
//! rewrites the text, then a tokenizer splits it into [`Token`]s. The
//! default pipeline is the bare [`SpaceTokenizer`], which splits on the
//! single space character and keeps empty tokens produced by runs of spaces.
//!
//! # Examples
//!
//! ```
//! use assent::analysis::tokenize;
//!
//! let utterance = tokenize("a b  c");
//! let texts: Vec<&str> = utterance.token_texts().collect();
//! assert_eq!(texts, vec!["a", "b", "", "c"]);
//! ```

pub mod char_filter;
pub mod token;
pub mod tokenizer;

pub use char_filter::{CharFilter, ContextCharFilter};
pub use token::{Token, TokenStream, Utterance};
pub use tokenizer::{SpaceTokenizer, Tokenizer};

/// Split `text` on single spaces into an [`Utterance`].
pub fn tokenize(text: &str) -> Utterance {
    Utterance::analyze(text, &SpaceTokenizer::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_space_yields_empty_token() {
        let utterance = tokenize("a b  c");
        let texts: Vec<&str> = utterance.token_texts().collect();
        assert_eq!(texts, vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_token_count_is_space_count_plus_one() {
        for text in ["", " ", "one", "好的，开始吧", "  leading", "trailing  ", "a b c d"] {
            let spaces = text.matches(' ').count();
            assert_eq!(tokenize(text).len(), spaces + 1, "text: {text:?}");
        }
    }

    #[test]
    fn test_preserves_case_and_punctuation() {
        let utterance = tokenize("OK, Start!");
        let texts: Vec<&str> = utterance.token_texts().collect();
        assert_eq!(texts, vec!["OK,", "Start!"]);
        assert_eq!(utterance.text(), "OK, Start!");
    }
}
