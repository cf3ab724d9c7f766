//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the main interface for text
//! analysis in Veracity. Analyzers combine a tokenizer and filters to turn
//! raw headline text into the token stream the vectorizer counts.
//!
//! # Role in Analysis Pipeline
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Feature Vector
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1
//!             ↓
//!         Filter N
//! ```
//!
//! # Examples
//!
//! Using a built-in analyzer:
//!
//! ```
//! use veracity::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Analyzers must be `Send + Sync` so a fitted pipeline holding one can be
/// shared across threads read-only.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// Runs the complete analysis pipeline, including tokenization and all
    /// configured filters. Analyzing identical text always yields an
    /// identical token sequence.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
