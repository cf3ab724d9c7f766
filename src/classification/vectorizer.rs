//! TF-IDF vectorizer for headline feature extraction.
//!
//! The vectorizer learns a vocabulary and per-term inverse document
//! frequencies from the training titles, then turns arbitrary text into a
//! fixed-length feature vector: raw term counts weighted by IDF and
//! L2-normalized. Vectors produced by the same fitted vectorizer are always
//! comparable (same dimensionality, same term-to-index mapping).

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::error::{Result, VeracityError};

/// TF-IDF vectorizer for text feature extraction.
///
/// Unfitted until [`fit`](TfIdfVectorizer::fit) is called; fitting assigns
/// every surviving distinct term a stable index in order of first appearance,
/// so refitting on the same documents reproduces the same vocabulary.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> index mapping, in first-appearance order.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency for each term, indexed by vocabulary index.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new, unfitted TF-IDF vectorizer with the given analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer,
        }
    }

    /// Fit the vectorizer on training documents.
    ///
    /// Builds the vocabulary in order of first appearance and computes the
    /// smoothed inverse document frequency
    /// `idf(t) = ln((1 + N) / (1 + df(t))) + 1`, which is strictly positive
    /// even for terms present in every document.
    ///
    /// An empty document list, or one whose every token is filtered away,
    /// is a data error: no vocabulary can be formed.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            return Err(VeracityError::data("cannot fit vectorizer on an empty corpus"));
        }

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for doc in documents {
            let tokens = self.tokenize(doc)?;

            // First appearance assigns the index; document frequency counts
            // each term once per document.
            let mut seen: HashSet<usize> = HashSet::new();
            for token in tokens {
                let next_index = vocabulary.len();
                let index = *vocabulary.entry(token).or_insert_with(|| {
                    document_frequency.push(0);
                    next_index
                });
                if seen.insert(index) {
                    document_frequency[index] += 1;
                }
            }
        }

        if vocabulary.is_empty() {
            return Err(VeracityError::data(
                "no vocabulary terms survive tokenization and stop word removal",
            ));
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0)
            .collect();

        self.n_documents = documents.len();
        self.vocabulary = vocabulary;
        self.idf = idf;

        debug!(
            "fitted vectorizer: {} terms from {} documents",
            self.vocabulary.len(),
            self.n_documents
        );

        Ok(())
    }

    /// Tokenize text with this vectorizer's analyzer.
    ///
    /// Exposed so callers can distinguish input that produces no tokens at
    /// all from input whose tokens simply fall outside the vocabulary.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.analyzer.analyze(text)?.map(|token| token.text).collect();
        Ok(tokens)
    }

    /// Transform a document into a TF-IDF feature vector.
    ///
    /// Terms absent from the fitted vocabulary contribute nothing and never
    /// raise an error. A document with no in-vocabulary terms transforms to
    /// the all-zero vector.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        let tokens = self.tokenize(document)?;
        Ok(self.transform_tokens(&tokens))
    }

    /// Transform already-analyzed tokens into a TF-IDF feature vector.
    ///
    /// Counts in-vocabulary terms, multiplies each count by the stored IDF,
    /// and L2-normalizes the result. The all-zero vector is left as-is.
    pub fn transform_tokens(&self, tokens: &[String]) -> Vec<f64> {
        let mut weights = vec![0.0; self.vocabulary.len()];

        for token in tokens {
            if let Some(&index) = self.vocabulary.get(token) {
                weights[index] += 1.0;
            }
        }

        for (index, weight) in weights.iter_mut().enumerate() {
            *weight *= self.idf[index];
        }

        let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in &mut weights {
                *weight /= norm;
            }
        }

        weights
    }

    /// Transform a batch of documents.
    pub fn transform_batch(&self, documents: &[String]) -> Result<Vec<Vec<f64>>> {
        documents.iter().map(|doc| self.transform(doc)).collect()
    }

    /// Get the size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents the vectorizer was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Look up the vocabulary index of a term.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::StandardAnalyzer;

    fn fitted(documents: &[&str]) -> TfIdfVectorizer {
        let documents: Vec<String> = documents.iter().map(|s| s.to_string()).collect();
        let analyzer = Arc::new(StandardAnalyzer::new().unwrap());
        let mut vectorizer = TfIdfVectorizer::new(analyzer);
        vectorizer.fit(&documents).unwrap();
        vectorizer
    }

    #[test]
    fn test_fit_builds_vocabulary_in_first_appearance_order() {
        let vectorizer = fitted(&["market grows steadily", "economy grows today"]);

        assert_eq!(vectorizer.vocabulary_size(), 5);
        assert_eq!(vectorizer.term_index("market"), Some(0));
        assert_eq!(vectorizer.term_index("grows"), Some(1));
        assert_eq!(vectorizer.term_index("steadily"), Some(2));
        assert_eq!(vectorizer.term_index("economy"), Some(3));
        assert_eq!(vectorizer.term_index("today"), Some(4));
    }

    #[test]
    fn test_idf_down_weights_common_terms() {
        let vectorizer = fitted(&["market grows", "economy grows", "cure grows"]);

        // "grows" appears in every document, the others in one each.
        let vector = vectorizer.transform("market grows").unwrap();
        let market = vector[vectorizer.term_index("market").unwrap()];
        let grows = vector[vectorizer.term_index("grows").unwrap()];
        assert!(market > grows);
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let vectorizer = fitted(&["market grows steadily", "economy improves today"]);

        let vector = vectorizer.transform("market grows today").unwrap();
        let norm: f64 = vector.iter().map(|w| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_ignores_unknown_terms() {
        let vectorizer = fitted(&["market grows steadily"]);

        let known = vectorizer.transform("market grows").unwrap();
        let with_unknown = vectorizer.transform("market grows xyzxyz").unwrap();
        assert_eq!(known, with_unknown);
    }

    #[test]
    fn test_transform_zero_vector_for_unseen_text() {
        let vectorizer = fitted(&["market grows steadily"]);

        let vector = vectorizer.transform("xyzxyz qqqqq").unwrap();
        assert_eq!(vector.len(), vectorizer.vocabulary_size());
        assert!(vector.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_transform_is_deterministic() {
        let vectorizer = fitted(&["market grows steadily", "economy improves today"]);

        let first = vectorizer.transform("economy grows today").unwrap();
        let second = vectorizer.transform("economy grows today").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fit_empty_corpus_is_rejected() {
        let analyzer = Arc::new(StandardAnalyzer::new().unwrap());
        let mut vectorizer = TfIdfVectorizer::new(analyzer);
        assert!(vectorizer.fit(&[]).is_err());
    }

    #[test]
    fn test_fit_stop_word_only_corpus_is_rejected() {
        let analyzer = Arc::new(StandardAnalyzer::new().unwrap());
        let mut vectorizer = TfIdfVectorizer::new(analyzer);
        let documents = vec!["the and of".to_string(), "is it by".to_string()];
        assert!(vectorizer.fit(&documents).is_err());
    }
}
