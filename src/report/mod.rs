//! Read-only corpus summaries for the presentation layer.
//!
//! These functions derive display data straight from the corpus: class
//! counts for distribution charts and aggregate per-class term frequencies
//! for word-cloud style displays. They never touch a fitted pipeline and
//! no core logic depends on them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::corpus::{Corpus, Label};
use crate::error::Result;

/// Raw class counts over a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCounts {
    /// Total number of headlines.
    pub total: usize,
    /// Headlines labeled real.
    pub real: usize,
    /// Headlines labeled fake.
    pub fake: usize,
}

/// Count headlines per class.
///
/// # Examples
///
/// ```
/// use veracity::corpus::{Corpus, Headline, Label};
/// use veracity::report::class_counts;
///
/// let corpus = Corpus::new(vec![
///     Headline::new("economy improves today", Label::Real),
///     Headline::new("miracle cure revealed", Label::Fake),
///     Headline::new("aliens land secretly", Label::Fake),
/// ]);
///
/// let counts = class_counts(&corpus);
/// assert_eq!(counts.total, 3);
/// assert_eq!(counts.real, 1);
/// assert_eq!(counts.fake, 2);
/// ```
pub fn class_counts(corpus: &Corpus) -> ClassCounts {
    let real = corpus
        .iter()
        .filter(|headline| headline.label == Label::Real)
        .count();

    ClassCounts {
        total: corpus.len(),
        real,
        fake: corpus.len() - real,
    }
}

/// Aggregate term frequencies over all headlines with the given label.
///
/// Terms are produced by the supplied analyzer, so passing the analysis
/// chain used for training yields exactly the model's view of the text.
/// The result is sorted by descending count, ties broken by term, so the
/// ordering is deterministic.
pub fn term_frequencies(
    corpus: &Corpus,
    label: Label,
    analyzer: &dyn Analyzer,
) -> Result<Vec<(String, usize)>> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for headline in corpus.iter().filter(|headline| headline.label == label) {
        for token in analyzer.analyze(&headline.title)? {
            *counts.entry(token.text).or_insert(0) += 1;
        }
    }

    let mut frequencies: Vec<(String, usize)> = counts.into_iter().collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(frequencies)
}
