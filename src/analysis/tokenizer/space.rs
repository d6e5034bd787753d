//! Single-space tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that splits text on the `' '` character only.
///
/// Unlike a whitespace tokenizer, runs of spaces are not collapsed: each
/// extra space yields an empty token, and tabs or newlines stay inside
/// tokens. The number of tokens is always the number of spaces plus one.
#[derive(Clone, Debug, Default)]
pub struct SpaceTokenizer;

impl SpaceTokenizer {
    /// Create a new space tokenizer.
    pub fn new() -> Self {
        SpaceTokenizer
    }
}

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut start = 0;

        for (position, piece) in text.split(' ').enumerate() {
            let end = start + piece.len();
            tokens.push(Token::with_offsets(piece, position, start, end));
            // skip the separator byte
            start = end + 1;
        }

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "space"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_tokenizer() {
        let tokenizer = SpaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "");
        assert_eq!(tokens[2].text, "world\ttest");
    }

    #[test]
    fn test_offsets_index_original_text() {
        let text = "好的 开始吧  OK";
        let tokens: Vec<Token> = SpaceTokenizer::new().tokenize(text).collect();

        assert_eq!(tokens.len(), 4);
        for token in &tokens {
            assert_eq!(&text[token.start_offset..token.end_offset], token.text);
        }
        assert_eq!(tokens[3].position, 3);
    }

    #[test]
    fn test_empty_input_yields_single_empty_token() {
        let tokens: Vec<Token> = SpaceTokenizer::new().tokenize("").collect();
        assert_eq!(tokens, vec![Token::with_offsets("", 0, 0, 0)]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(SpaceTokenizer::new().name(), "space");
    }
}
