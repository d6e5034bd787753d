//! Tokenizer implementations for utterance analysis.
//!
//! # Available Tokenizers
//!
//! - [`space::SpaceTokenizer`] - Splits on the single space character
//!
//! # Examples
//!
//! ```
//! use assent::analysis::tokenizer::{SpaceTokenizer, Tokenizer};
//!
//! let tokenizer = SpaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenizers are total: every input yields a (possibly single, possibly
/// empty-text) token stream.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod space;

pub use space::SpaceTokenizer;
