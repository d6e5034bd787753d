//! Char filters that rewrite utterance text before tokenization.
//!
//! # Available Filters
//!
//! - [`context::ContextCharFilter`] - Removes known conversational lead-in phrases

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod context;

pub use context::ContextCharFilter;
