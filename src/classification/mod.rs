//! Headline classification core.
//!
//! This module composes the TF-IDF vectorizer and the multinomial Naive
//! Bayes model into a single fit/predict [`Pipeline`], and provides the two
//! entry points the surrounding application consumes:
//!
//! - [`train`] — called once at startup: splits the corpus, fits a pipeline
//!   on the training partition, and reports held-out accuracy.
//! - [`classify`] — called per user action: classifies one headline and
//!   returns the label together with a calibrated confidence score.
//!
//! # Examples
//!
//! ```
//! use veracity::classification::{self, TrainOptions};
//! use veracity::corpus::{Corpus, Headline, Label};
//!
//! let corpus = Corpus::new(vec![
//!     Headline::new("market grows steadily", Label::Real),
//!     Headline::new("economy improves today", Label::Real),
//!     Headline::new("stocks rally further", Label::Real),
//!     Headline::new("aliens land secretly", Label::Fake),
//!     Headline::new("miracle cure revealed", Label::Fake),
//!     Headline::new("celebrity clone spotted", Label::Fake),
//! ]);
//!
//! let (pipeline, accuracy) = classification::train(&corpus, &TrainOptions::default()).unwrap();
//! assert!((0.0..=1.0).contains(&accuracy));
//!
//! let prediction = classification::classify(&pipeline, "economy grows today").unwrap();
//! assert!(prediction.confidence >= 0.5);
//! ```

use log::info;
use serde::{Deserialize, Serialize};

use crate::corpus::{Corpus, Label};
use crate::error::Result;
use crate::model_selection::{accuracy, train_test_split};

pub mod naive_bayes;
pub mod pipeline;
pub mod vectorizer;

pub use naive_bayes::MultinomialNb;
pub use pipeline::Pipeline;
pub use vectorizer::TfIdfVectorizer;

/// Options for the training entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainOptions {
    /// Fraction of the corpus held out for accuracy evaluation.
    pub test_fraction: f64,
    /// Random seed for the train/test partition.
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: 42,
        }
    }
}

impl TrainOptions {
    /// Set the held-out test fraction.
    pub fn with_test_fraction(mut self, test_fraction: f64) -> Self {
        self.test_fraction = test_fraction;
        self
    }

    /// Set the split seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A single classification result: the predicted label and the maximum
/// class probability backing it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted class label.
    pub label: Label,
    /// Confidence in [0, 1]: the probability of the predicted class.
    pub confidence: f64,
}

/// Train a classification pipeline on a corpus.
///
/// Deterministically partitions the corpus per `options`, fits a pipeline
/// on the training partition, and evaluates accuracy on the held-out
/// partition. Returns the fitted pipeline and the accuracy fraction.
pub fn train(corpus: &Corpus, options: &TrainOptions) -> Result<(Pipeline, f64)> {
    let (titles, labels) = corpus.titles_and_labels();

    let (train_titles, test_titles, train_labels, test_labels) =
        train_test_split(&titles, &labels, options.test_fraction, options.seed)?;

    let pipeline = Pipeline::fit(&train_titles, &train_labels)?;
    let model_accuracy = accuracy(&pipeline, &test_titles, &test_labels)?;

    info!(
        "trained on {} headlines ({} vocabulary terms), held-out accuracy {:.4}",
        train_titles.len(),
        pipeline.vocabulary_size(),
        model_accuracy
    );

    Ok((pipeline, model_accuracy))
}

/// Classify a single headline against a fitted pipeline.
///
/// The confidence is the maximum class probability from
/// [`Pipeline::predict_proba`], so it always lies in [0, 1]. Input rules
/// (empty input, token-free input, prior fallback) are those of
/// `predict_proba`.
pub fn classify(pipeline: &Pipeline, text: &str) -> Result<Prediction> {
    let probabilities = pipeline.predict_proba(text)?;

    // Argmax with ties toward the lower class index, matching predict().
    let label = if probabilities[Label::Real.index()] > probabilities[Label::Fake.index()] {
        Label::Real
    } else {
        Label::Fake
    };

    Ok(Prediction {
        label,
        confidence: probabilities[label.index()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Headline;

    fn toy_corpus() -> Corpus {
        Corpus::new(vec![
            Headline::new("market grows steadily", Label::Real),
            Headline::new("economy improves today", Label::Real),
            Headline::new("stocks rally further", Label::Real),
            Headline::new("trade expands again", Label::Real),
            Headline::new("aliens land secretly", Label::Fake),
            Headline::new("miracle cure revealed", Label::Fake),
            Headline::new("celebrity clone spotted", Label::Fake),
            Headline::new("moon base hidden", Label::Fake),
        ])
    }

    #[test]
    fn test_train_returns_accuracy_fraction() {
        let corpus = toy_corpus();
        let (_, accuracy) = train(&corpus, &TrainOptions::default()).unwrap();
        assert!((0.0..=1.0).contains(&accuracy));
    }

    #[test]
    fn test_train_is_reproducible() {
        let corpus = toy_corpus();
        let options = TrainOptions::default();

        let (first_pipeline, first_accuracy) = train(&corpus, &options).unwrap();
        let (second_pipeline, second_accuracy) = train(&corpus, &options).unwrap();

        assert_eq!(first_accuracy, second_accuracy);
        assert_eq!(
            first_pipeline.predict_proba("economy grows today").unwrap(),
            second_pipeline.predict_proba("economy grows today").unwrap()
        );
    }

    #[test]
    fn test_classify_confidence_bounds() {
        let corpus = toy_corpus();
        let (pipeline, _) = train(&corpus, &TrainOptions::default()).unwrap();

        let prediction = classify(&pipeline, "economy grows today").unwrap();
        assert!(prediction.confidence >= 0.5);
        assert!(prediction.confidence <= 1.0);
    }

    #[test]
    fn test_classify_rejects_blank_input() {
        let corpus = toy_corpus();
        let (pipeline, _) = train(&corpus, &TrainOptions::default()).unwrap();

        assert!(classify(&pipeline, "  ").unwrap_err().is_validation());
    }

    #[test]
    fn test_train_options_builders() {
        let options = TrainOptions::default()
            .with_test_fraction(0.5)
            .with_seed(7);
        assert_eq!(options.test_fraction, 0.5);
        assert_eq!(options.seed, 7);
    }
}
