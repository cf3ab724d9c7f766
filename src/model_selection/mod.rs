//! Train/test partitioning and accuracy evaluation.
//!
//! The split is a deterministic pseudo-random partition: the same seed and
//! the same inputs always produce the same partition, which keeps reported
//! accuracy reproducible across runs.
//!
//! # Examples
//!
//! ```
//! use veracity::corpus::Label;
//! use veracity::model_selection::train_test_split;
//!
//! let documents: Vec<String> = (0..10).map(|i| format!("headline {i}")).collect();
//! let labels: Vec<Label> = (0..10)
//!     .map(|i| if i % 2 == 0 { Label::Real } else { Label::Fake })
//!     .collect();
//!
//! let (train_docs, test_docs, train_labels, test_labels) =
//!     train_test_split(&documents, &labels, 0.2, 42).unwrap();
//!
//! assert_eq!(train_docs.len(), 8);
//! assert_eq!(test_docs.len(), 2);
//! assert_eq!(train_labels.len(), 8);
//! assert_eq!(test_labels.len(), 2);
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::classification::Pipeline;
use crate::corpus::Label;
use crate::error::{Result, VeracityError};

/// Shuffled indices for a reproducible partition.
fn shuffle_indices(n_samples: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    indices
}

/// Split documents and labels into train and test partitions.
///
/// `test_fraction` must lie strictly between 0 and 1; the test partition
/// size is `round(n * test_fraction)` and neither partition may end up
/// empty. Returns `(train_docs, test_docs, train_labels, test_labels)`.
pub fn train_test_split(
    documents: &[String],
    labels: &[Label],
    test_fraction: f64,
    seed: u64,
) -> Result<(Vec<String>, Vec<String>, Vec<Label>, Vec<Label>)> {
    if !(0.0..1.0).contains(&test_fraction) || test_fraction == 0.0 {
        return Err(VeracityError::data(format!(
            "test_fraction must be between 0 and 1, got {test_fraction}"
        )));
    }
    if documents.len() != labels.len() {
        return Err(VeracityError::data(format!(
            "document and label counts differ: {} vs {}",
            documents.len(),
            labels.len()
        )));
    }

    let n_samples = documents.len();
    let n_test = (n_samples as f64 * test_fraction).round() as usize;
    let n_train = n_samples - n_test;

    if n_test == 0 || n_train == 0 {
        return Err(VeracityError::data(format!(
            "split would leave an empty partition (n_train={n_train}, n_test={n_test})"
        )));
    }

    let indices = shuffle_indices(n_samples, seed);
    let (train_indices, test_indices) = indices.split_at(n_train);

    let pick_docs =
        |idx: &[usize]| -> Vec<String> { idx.iter().map(|&i| documents[i].clone()).collect() };
    let pick_labels = |idx: &[usize]| -> Vec<Label> { idx.iter().map(|&i| labels[i]).collect() };

    Ok((
        pick_docs(train_indices),
        pick_docs(test_indices),
        pick_labels(train_indices),
        pick_labels(test_indices),
    ))
}

/// Classification accuracy of a fitted pipeline over a held-out set.
///
/// Returns the fraction of correct predictions in [0, 1]. An empty
/// evaluation set is a data error.
pub fn accuracy(pipeline: &Pipeline, documents: &[String], labels: &[Label]) -> Result<f64> {
    if documents.is_empty() {
        return Err(VeracityError::data("cannot evaluate on an empty test set"));
    }
    if documents.len() != labels.len() {
        return Err(VeracityError::data(format!(
            "document and label counts differ: {} vs {}",
            documents.len(),
            labels.len()
        )));
    }

    let mut correct = 0usize;
    for (document, label) in documents.iter().zip(labels) {
        if pipeline.predict(document)? == *label {
            correct += 1;
        }
    }

    Ok(correct as f64 / documents.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data(n: usize) -> (Vec<String>, Vec<Label>) {
        let documents = (0..n).map(|i| format!("headline number {i}")).collect();
        let labels = (0..n)
            .map(|i| if i % 2 == 0 { Label::Real } else { Label::Fake })
            .collect();
        (documents, labels)
    }

    #[test]
    fn test_split_sizes() {
        let (documents, labels) = sample_data(10);
        let (train_docs, test_docs, train_labels, test_labels) =
            train_test_split(&documents, &labels, 0.2, 42).unwrap();

        assert_eq!(train_docs.len(), 8);
        assert_eq!(test_docs.len(), 2);
        assert_eq!(train_labels.len(), 8);
        assert_eq!(test_labels.len(), 2);
    }

    #[test]
    fn test_split_is_a_partition() {
        let (documents, labels) = sample_data(10);
        let (train_docs, test_docs, _, _) =
            train_test_split(&documents, &labels, 0.3, 42).unwrap();

        let mut all: Vec<String> = train_docs.into_iter().chain(test_docs).collect();
        all.sort();
        let mut expected = documents.clone();
        expected.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_split_reproducibility() {
        let (documents, labels) = sample_data(20);

        let first = train_test_split(&documents, &labels, 0.2, 42).unwrap();
        let second = train_test_split(&documents, &labels, 0.2, 42).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_split_differs_across_seeds() {
        let (documents, labels) = sample_data(20);

        let first = train_test_split(&documents, &labels, 0.2, 42).unwrap();
        let second = train_test_split(&documents, &labels, 0.2, 123).unwrap();
        assert_ne!(first.0, second.0);
    }

    #[test]
    fn test_split_keeps_documents_aligned_with_labels() {
        let (documents, labels) = sample_data(10);
        let (train_docs, test_docs, train_labels, test_labels) =
            train_test_split(&documents, &labels, 0.2, 7).unwrap();

        // Even-numbered headlines are Real in sample_data.
        for (doc, label) in train_docs.iter().zip(&train_labels) {
            let i: usize = doc.rsplit(' ').next().unwrap().parse().unwrap();
            let expected = if i % 2 == 0 { Label::Real } else { Label::Fake };
            assert_eq!(*label, expected);
        }
        for (doc, label) in test_docs.iter().zip(&test_labels) {
            let i: usize = doc.rsplit(' ').next().unwrap().parse().unwrap();
            let expected = if i % 2 == 0 { Label::Real } else { Label::Fake };
            assert_eq!(*label, expected);
        }
    }

    #[test]
    fn test_split_invalid_fraction() {
        let (documents, labels) = sample_data(10);
        assert!(train_test_split(&documents, &labels, 0.0, 42).is_err());
        assert!(train_test_split(&documents, &labels, 1.0, 42).is_err());
        assert!(train_test_split(&documents, &labels, 1.5, 42).is_err());
    }

    #[test]
    fn test_split_too_small() {
        let (documents, labels) = sample_data(2);
        // round(2 * 0.1) == 0 test samples
        assert!(train_test_split(&documents, &labels, 0.1, 42).is_err());
    }

    #[test]
    fn test_accuracy_on_separable_corpus() {
        let documents: Vec<String> = vec![
            "market grows steadily".into(),
            "economy improves today".into(),
            "aliens land secretly".into(),
            "miracle cure revealed".into(),
        ];
        let labels = vec![Label::Real, Label::Real, Label::Fake, Label::Fake];
        let pipeline = Pipeline::fit(&documents, &labels).unwrap();

        // Evaluating on the training set itself: fully separable vocabulary.
        let score = accuracy(&pipeline, &documents, &labels).unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_accuracy_empty_set_is_rejected() {
        let documents: Vec<String> = vec![
            "market grows steadily".into(),
            "aliens land secretly".into(),
        ];
        let labels = vec![Label::Real, Label::Fake];
        let pipeline = Pipeline::fit(&documents, &labels).unwrap();

        assert!(accuracy(&pipeline, &[], &[]).is_err());
    }
}
