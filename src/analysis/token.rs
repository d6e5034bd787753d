//! Token and utterance types.
//!
//! A [`Token`] is an opaque slice of the input text. Casing and punctuation
//! are kept as-is; case folding only happens when tokens are compared.
//!
//! ```
//! use assent::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Tokenizer;

/// A single unit of text produced by a tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// An analyzed utterance: the raw text and the tokens derived from it.
///
/// Utterances are immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    text: String,
    tokens: Vec<Token>,
}

impl Utterance {
    /// Build an utterance from pre-split tokens.
    pub fn new<S: Into<String>>(text: S, tokens: Vec<Token>) -> Self {
        Utterance {
            text: text.into(),
            tokens,
        }
    }

    /// Run `tokenizer` over `text`.
    pub fn analyze(text: &str, tokenizer: &dyn Tokenizer) -> Self {
        Utterance::new(text, tokenizer.tokenize(text).collect())
    }

    /// The text the tokens were produced from, after any char filtering.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over the token texts in order.
    pub fn token_texts(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|token| token.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Utterance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert_eq!(token.len(), 5);
        assert!(!token.is_empty());
        assert!(Token::new("", 3).is_empty());
    }

    #[test]
    fn test_utterance_keeps_raw_text() {
        let tokens = vec![Token::with_offsets("OK", 0, 0, 2), Token::with_offsets("go", 1, 3, 5)];
        let utterance = Utterance::new("OK go", tokens);

        assert_eq!(utterance.text(), "OK go");
        assert_eq!(utterance.len(), 2);
        assert_eq!(utterance.to_string(), "OK go");
        assert_eq!(utterance.token_texts().collect::<Vec<_>>(), vec!["OK", "go"]);
    }
}
