//! # Veracity
//!
//! A statistical real/fake headline classifier for Rust.
//!
//! ## Features
//!
//! - TF-IDF term weighting over a configurable analysis pipeline
//! - Multinomial Naive Bayes classification with calibrated confidence
//! - Deterministic train/test splitting and accuracy evaluation
//! - CSV/JSON dataset loading with strict label validation
//! - Read-only corpus summaries for charts and word clouds

pub mod analysis;
pub mod classification;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod model_selection;
pub mod report;

pub mod prelude {
    pub use crate::classification::{Pipeline, Prediction, TrainOptions, classify, train};
    pub use crate::corpus::{Corpus, Headline, Label};
    pub use crate::error::{Result, VeracityError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
