//! Multinomial Naive Bayes classifier over TF-IDF features.
//!
//! The model is a pure data structure: per-class log priors plus a smoothed
//! per-class, per-term log-likelihood table, both computed once during
//! fitting and read-only afterward. Additive (Laplace) smoothing with a
//! fixed constant of 1 guarantees no conditional weight is ever exactly
//! zero, so terms unseen in a class never zero out that class's score.

use log::debug;

use crate::corpus::Label;
use crate::error::{Result, VeracityError};

/// Additive smoothing constant. Fixed at 1 (add-one smoothing).
const SMOOTHING: f64 = 1.0;

/// Multinomial Naive Bayes model for binary headline classification.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    /// Log prior probability per class, indexed by class index.
    class_log_priors: [f64; Label::COUNT],
    /// Log conditional weight per class and vocabulary term.
    feature_log_probs: [Vec<f64>; Label::COUNT],
}

impl MultinomialNb {
    /// Fit a model from weighted feature vectors and their labels.
    ///
    /// Computes the class prior `P(c) = count(label = c) / N` and, per class
    /// and term, the smoothed conditional weight
    /// `theta[c][j] = (sum_j + 1) / (total_c + V)` where `sum_j` is the
    /// total feature weight of term `j` over class-`c` documents, `total_c`
    /// the total feature weight over class-`c` documents, and `V` the
    /// vocabulary size.
    ///
    /// Fitting on an empty training set, mismatched vector/label lengths,
    /// ragged vector dimensions, or a single-class training set is a data
    /// error: no valid prior or likelihood can be formed.
    pub fn fit(vectors: &[Vec<f64>], labels: &[Label]) -> Result<Self> {
        if vectors.is_empty() {
            return Err(VeracityError::data("cannot fit classifier on an empty corpus"));
        }
        if vectors.len() != labels.len() {
            return Err(VeracityError::data(format!(
                "feature vector and label counts differ: {} vs {}",
                vectors.len(),
                labels.len()
            )));
        }

        let n_features = vectors[0].len();
        if vectors.iter().any(|v| v.len() != n_features) {
            return Err(VeracityError::data(
                "feature vectors have inconsistent dimensionality",
            ));
        }

        let mut class_counts = [0usize; Label::COUNT];
        let mut feature_sums = [vec![0.0; n_features], vec![0.0; n_features]];

        for (vector, label) in vectors.iter().zip(labels) {
            let class = label.index();
            class_counts[class] += 1;
            for (sum, weight) in feature_sums[class].iter_mut().zip(vector) {
                *sum += weight;
            }
        }

        if class_counts.iter().any(|&count| count == 0) {
            return Err(VeracityError::data(
                "training corpus contains only one label; both real and fake examples are required",
            ));
        }

        let n = vectors.len() as f64;
        let class_log_priors =
            [0usize, 1].map(|class| (class_counts[class] as f64 / n).ln());

        let feature_log_probs = [0usize, 1].map(|class| {
            let total: f64 = feature_sums[class].iter().sum();
            let denominator = total + SMOOTHING * n_features as f64;
            feature_sums[class]
                .iter()
                .map(|&sum| ((sum + SMOOTHING) / denominator).ln())
                .collect()
        });

        debug!(
            "fitted classifier: {} fake / {} real over {} terms",
            class_counts[Label::Fake.index()],
            class_counts[Label::Real.index()],
            n_features
        );

        Ok(MultinomialNb {
            class_log_priors,
            feature_log_probs,
        })
    }

    /// Number of vocabulary terms the model was fitted over.
    pub fn n_features(&self) -> usize {
        self.feature_log_probs[0].len()
    }

    /// Class prior probabilities, indexed by class index. Sum to 1.
    pub fn class_priors(&self) -> [f64; Label::COUNT] {
        self.class_log_priors.map(f64::exp)
    }

    /// Unnormalized log-joint score per class:
    /// `log P(c) + sum_j vector[j] * log theta[c][j]`.
    pub fn predict_log_joint(&self, vector: &[f64]) -> Result<[f64; Label::COUNT]> {
        if vector.len() != self.n_features() {
            return Err(VeracityError::invalid_argument(format!(
                "feature vector has {} dimensions, model expects {}",
                vector.len(),
                self.n_features()
            )));
        }

        Ok([0usize, 1].map(|class| {
            let likelihood: f64 = vector
                .iter()
                .zip(&self.feature_log_probs[class])
                .map(|(weight, log_prob)| weight * log_prob)
                .sum();
            self.class_log_priors[class] + likelihood
        }))
    }

    /// Probability distribution over classes for a feature vector.
    ///
    /// The log-joint scores are shifted by their maximum before
    /// exponentiation for numeric stability, then normalized so the two
    /// class probabilities sum to 1.
    pub fn predict_proba(&self, vector: &[f64]) -> Result<[f64; Label::COUNT]> {
        let log_joint = self.predict_log_joint(vector)?;

        let max = log_joint[0].max(log_joint[1]);
        let exp = log_joint.map(|score| (score - max).exp());
        let total: f64 = exp.iter().sum();

        Ok(exp.map(|score| score / total))
    }

    /// The class with the maximum probability.
    ///
    /// Ties break toward the lower class index, so an exactly even
    /// posterior predicts [`Label::Fake`].
    pub fn predict(&self, vector: &[f64]) -> Result<Label> {
        let probabilities = self.predict_proba(vector)?;

        let mut best = 0;
        for class in 1..Label::COUNT {
            if probabilities[class] > probabilities[best] {
                best = class;
            }
        }

        Ok(Label::from_index(best).expect("class index is always in range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_model() -> MultinomialNb {
        // Term 0 dominates fake documents, term 1 real documents.
        let vectors = vec![
            vec![1.0, 0.0],
            vec![0.9, 0.1],
            vec![0.0, 1.0],
            vec![0.1, 0.9],
        ];
        let labels = vec![Label::Fake, Label::Fake, Label::Real, Label::Real];
        MultinomialNb::fit(&vectors, &labels).unwrap()
    }

    #[test]
    fn test_fit_empty_is_rejected() {
        assert!(MultinomialNb::fit(&[], &[]).is_err());
    }

    #[test]
    fn test_fit_single_class_is_rejected() {
        let vectors = vec![vec![1.0, 0.0], vec![0.5, 0.5]];
        let labels = vec![Label::Real, Label::Real];
        let err = MultinomialNb::fit(&vectors, &labels).unwrap_err();
        assert!(err.to_string().contains("one label"));
    }

    #[test]
    fn test_fit_mismatched_lengths_is_rejected() {
        let vectors = vec![vec![1.0, 0.0]];
        let labels = vec![Label::Real, Label::Fake];
        assert!(MultinomialNb::fit(&vectors, &labels).is_err());
    }

    #[test]
    fn test_fit_ragged_vectors_are_rejected() {
        let vectors = vec![vec![1.0, 0.0], vec![1.0]];
        let labels = vec![Label::Real, Label::Fake];
        assert!(MultinomialNb::fit(&vectors, &labels).is_err());
    }

    #[test]
    fn test_class_priors_reflect_label_counts() {
        let vectors = vec![vec![1.0], vec![1.0], vec![1.0], vec![1.0]];
        let labels = vec![Label::Fake, Label::Real, Label::Real, Label::Real];
        let model = MultinomialNb::fit(&vectors, &labels).unwrap();

        let priors = model.class_priors();
        assert!((priors[Label::Fake.index()] - 0.25).abs() < 1e-12);
        assert!((priors[Label::Real.index()] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_predict_proba_sums_to_one() {
        let model = toy_model();
        let probabilities = model.predict_proba(&[0.7, 0.3]).unwrap();

        assert!(probabilities.iter().all(|&p| p >= 0.0));
        assert!((probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_predict_matches_argmax() {
        let model = toy_model();

        for vector in [[1.0, 0.0], [0.0, 1.0], [0.4, 0.6], [0.6, 0.4]] {
            let probabilities = model.predict_proba(&vector).unwrap();
            let expected = if probabilities[1] > probabilities[0] {
                Label::Real
            } else {
                Label::Fake
            };
            assert_eq!(model.predict(&vector).unwrap(), expected);
        }
    }

    #[test]
    fn test_predict_separates_classes() {
        let model = toy_model();

        assert_eq!(model.predict(&[1.0, 0.0]).unwrap(), Label::Fake);
        assert_eq!(model.predict(&[0.0, 1.0]).unwrap(), Label::Real);
    }

    #[test]
    fn test_zero_vector_scores_fall_back_to_priors() {
        let vectors = vec![vec![1.0, 0.0], vec![1.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]];
        let labels = vec![Label::Fake, Label::Fake, Label::Fake, Label::Real];
        let model = MultinomialNb::fit(&vectors, &labels).unwrap();

        // With no feature evidence, the posterior is exactly the prior.
        let probabilities = model.predict_proba(&[0.0, 0.0]).unwrap();
        let priors = model.class_priors();
        assert!((probabilities[0] - priors[0]).abs() < 1e-12);
        assert!((probabilities[1] - priors[1]).abs() < 1e-12);
    }

    #[test]
    fn test_dimension_mismatch_is_rejected() {
        let model = toy_model();
        assert!(model.predict_proba(&[1.0, 0.0, 0.0]).is_err());
    }
}
