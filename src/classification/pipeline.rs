//! Classification pipeline combining vectorization and Naive Bayes.
//!
//! A [`Pipeline`] owns exactly one fitted [`TfIdfVectorizer`] and one fitted
//! [`MultinomialNb`], so the vocabulary and weighting used during training
//! are guaranteed to be reused at inference time. Pipelines are constructed
//! only through [`Pipeline::fit`]; there is no way to mutate one afterward,
//! and retraining means fitting a new pipeline.

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::classification::naive_bayes::MultinomialNb;
use crate::classification::vectorizer::TfIdfVectorizer;
use crate::corpus::Label;
use crate::error::{Result, VeracityError};

/// A frozen fit/predict unit for headline classification.
pub struct Pipeline {
    vectorizer: TfIdfVectorizer,
    classifier: MultinomialNb,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("vectorizer", &self.vectorizer)
            .field("classes", &Label::all())
            .finish()
    }
}

impl Pipeline {
    /// Fit a pipeline on training documents and labels using the standard
    /// analyzer (letter-run tokenization, lowercasing, English stop words).
    pub fn fit(documents: &[String], labels: &[Label]) -> Result<Self> {
        Self::fit_with_analyzer(documents, labels, Arc::new(StandardAnalyzer::new()?))
    }

    /// Fit a pipeline with a custom analysis chain.
    ///
    /// Runs vectorizer fitting, transforms the training documents, and fits
    /// the classifier on the resulting weighted vectors.
    pub fn fit_with_analyzer(
        documents: &[String],
        labels: &[Label],
        analyzer: Arc<dyn Analyzer>,
    ) -> Result<Self> {
        if documents.len() != labels.len() {
            return Err(VeracityError::data(format!(
                "document and label counts differ: {} vs {}",
                documents.len(),
                labels.len()
            )));
        }

        let mut vectorizer = TfIdfVectorizer::new(analyzer);
        vectorizer.fit(documents)?;

        let vectors = vectorizer.transform_batch(documents)?;
        let classifier = MultinomialNb::fit(&vectors, labels)?;

        Ok(Pipeline {
            vectorizer,
            classifier,
        })
    }

    /// Predict the label for a headline.
    ///
    /// Same input rules as [`predict_proba`](Pipeline::predict_proba).
    pub fn predict(&self, text: &str) -> Result<Label> {
        let probabilities = self.predict_proba(text)?;

        let mut best = 0;
        for class in 1..Label::COUNT {
            if probabilities[class] > probabilities[best] {
                best = class;
            }
        }

        Ok(Label::from_index(best).expect("class index is always in range"))
    }

    /// Predict the probability distribution over classes for a headline.
    ///
    /// Empty or whitespace-only input, and input that produces no tokens at
    /// all after analysis (punctuation or stop words only), is a validation
    /// error. Input that produces tokens but shares no term with the fitted
    /// vocabulary transforms to the zero feature vector; for that degenerate
    /// case the pipeline explicitly returns the training class priors
    /// instead of fabricating evidence. This prior-only fallback is
    /// intentional, documented behavior.
    pub fn predict_proba(&self, text: &str) -> Result<[f64; Label::COUNT]> {
        if text.trim().is_empty() {
            return Err(VeracityError::validation("headline must not be empty"));
        }

        let tokens = self.vectorizer.tokenize(text)?;
        if tokens.is_empty() {
            return Err(VeracityError::validation(
                "headline contains no classifiable terms",
            ));
        }

        let vector = self.vectorizer.transform_tokens(&tokens);
        if vector.iter().all(|&w| w == 0.0) {
            // No vocabulary overlap: the posterior is exactly the prior.
            return Ok(self.classifier.class_priors());
        }

        self.classifier.predict_proba(&vector)
    }

    /// The ordered set of known classes, in class-index order.
    pub fn classes(&self) -> [Label; Label::COUNT] {
        Label::all()
    }

    /// Size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    /// The fitted vectorizer.
    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    /// The fitted classifier.
    pub fn classifier(&self) -> &MultinomialNb {
        &self.classifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_corpus() -> (Vec<String>, Vec<Label>) {
        let documents = vec![
            "market grows steadily".to_string(),
            "economy improves today".to_string(),
            "aliens land secretly".to_string(),
            "miracle cure revealed".to_string(),
        ];
        let labels = vec![Label::Real, Label::Real, Label::Fake, Label::Fake];
        (documents, labels)
    }

    #[test]
    fn test_fit_and_predict() {
        let (documents, labels) = toy_corpus();
        let pipeline = Pipeline::fit(&documents, &labels).unwrap();

        assert_eq!(pipeline.predict("economy grows today").unwrap(), Label::Real);
        assert_eq!(pipeline.predict("aliens cure revealed").unwrap(), Label::Fake);
    }

    #[test]
    fn test_predict_empty_input_is_validation_error() {
        let (documents, labels) = toy_corpus();
        let pipeline = Pipeline::fit(&documents, &labels).unwrap();

        let err = pipeline.predict("").unwrap_err();
        assert!(err.is_validation());

        let err = pipeline.predict("   \t\n").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_predict_token_free_input_is_validation_error() {
        let (documents, labels) = toy_corpus();
        let pipeline = Pipeline::fit(&documents, &labels).unwrap();

        // Stop words and punctuation only: nothing survives analysis.
        let err = pipeline.predict("the and of!").unwrap_err();
        assert!(err.is_validation());

        let err = pipeline.predict("1234 ...").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_predict_no_overlap_falls_back_to_priors() {
        let (documents, labels) = toy_corpus();
        let pipeline = Pipeline::fit(&documents, &labels).unwrap();

        let probabilities = pipeline.predict_proba("xyzxyz qqqqq").unwrap();
        let priors = pipeline.classifier().class_priors();
        assert_eq!(probabilities, priors);
    }

    #[test]
    fn test_classes_are_ordered() {
        let (documents, labels) = toy_corpus();
        let pipeline = Pipeline::fit(&documents, &labels).unwrap();

        assert_eq!(pipeline.classes(), [Label::Fake, Label::Real]);
    }

    #[test]
    fn test_fit_mismatched_lengths_is_rejected() {
        let (documents, _) = toy_corpus();
        let labels = vec![Label::Real];
        assert!(Pipeline::fit(&documents, &labels).is_err());
    }
}
