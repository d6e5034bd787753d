//! # assent
//!
//! Classifies short utterances as affirmative or negative by lexical
//! matching against a list of reference terms, and synthesizes labeled test
//! corpora from seed phrases.
//!
//! ## Features
//!
//! - Single-space tokenization that keeps empty tokens
//! - Case-insensitive exact matching with a positional-similarity fallback
//! - Seedable corpus synthesis with conversational lead-in prefixes
//! - Line-oriented `<text> => <label>` reports
//!
//! ```
//! use assent::analysis::tokenize;
//! use assent::classification::{classify, Classification, ReferenceTermSet};
//!
//! let terms = ReferenceTermSet::from(vec!["好的", "可以"]);
//! assert_eq!(classify(&tokenize("好的 开始吧"), &terms), Classification::Affirmative);
//! assert_eq!(classify(&tokenize("不了，不用了"), &terms), Classification::Negative);
//! ```

pub mod analysis;
pub mod classification;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod util;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
