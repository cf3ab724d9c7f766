//! Labeled headline corpus.
//!
//! A [`Corpus`] is an ordered, immutable collection of [`Headline`]s loaded
//! once at startup from a flat labeled dataset. Datasets are tabular files
//! with at least a `title` column (free text) and a `label` column holding
//! the integer 0 (fake) or 1 (real); any other label value, or a missing
//! column, fails loading with a data error.
//!
//! The corpus is never mutated after loading. It is passed by reference into
//! the evaluator, the vectorizer, and the report functions.
//!
//! # Examples
//!
//! ```
//! use veracity::corpus::{Corpus, Label};
//!
//! let data = "title,label\nmarket grows steadily,1\naliens land secretly,0\n";
//! let corpus = Corpus::from_csv_reader(data.as_bytes()).unwrap();
//!
//! assert_eq!(corpus.len(), 2);
//! assert_eq!(corpus.headlines()[0].label, Label::Real);
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VeracityError};

/// Classification label for a headline.
///
/// `Fake` is class index 0 and `Real` is class index 1, matching the integer
/// labels used in dataset files. The index order is the classifier's class
/// order, so equal posteriors resolve to `Fake`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Label {
    /// Fabricated headline (dataset label 0).
    Fake,
    /// Genuine headline (dataset label 1).
    Real,
}

impl Label {
    /// Number of known classes.
    pub const COUNT: usize = 2;

    /// The ordered set of known classes, in class-index order.
    pub fn all() -> [Label; 2] {
        [Label::Fake, Label::Real]
    }

    /// The class index of this label (Fake = 0, Real = 1).
    pub fn index(self) -> usize {
        match self {
            Label::Fake => 0,
            Label::Real => 1,
        }
    }

    /// Look up a label by class index.
    pub fn from_index(index: usize) -> Option<Label> {
        match index {
            0 => Some(Label::Fake),
            1 => Some(Label::Real),
            _ => None,
        }
    }
}

impl TryFrom<i64> for Label {
    type Error = String;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Fake),
            1 => Ok(Label::Real),
            other => Err(format!("label must be 0 or 1, got {other}")),
        }
    }
}

impl From<Label> for i64 {
    fn from(label: Label) -> i64 {
        label.index() as i64
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Fake => write!(f, "fake"),
            Label::Real => write!(f, "real"),
        }
    }
}

/// A single labeled headline. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    /// Headline text.
    pub title: String,
    /// Authenticity label.
    pub label: Label,
}

impl Headline {
    /// Create a new headline.
    pub fn new<S: Into<String>>(title: S, label: Label) -> Self {
        Headline {
            title: title.into(),
            label,
        }
    }
}

/// An ordered collection of labeled headlines.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    headlines: Vec<Headline>,
}

impl Corpus {
    /// Create a corpus from headlines already in memory.
    pub fn new(headlines: Vec<Headline>) -> Self {
        Corpus { headlines }
    }

    /// Load a corpus from a CSV file with `title` and `label` columns.
    ///
    /// Extra columns are ignored. A missing `title`/`label` column, a label
    /// other than 0 or 1, or a dataset with no records is a data error.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(BufReader::new(file))
    }

    /// Load a corpus from CSV data in any reader.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let mut headlines = Vec::new();
        for record in csv_reader.deserialize() {
            let headline: Headline = record
                .map_err(|e| VeracityError::data(format!("malformed dataset record: {e}")))?;
            headlines.push(headline);
        }

        if headlines.is_empty() {
            return Err(VeracityError::data("dataset contains no records"));
        }

        Ok(Corpus { headlines })
    }

    /// Load a corpus from a JSON file holding an array of headlines.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let headlines: Vec<Headline> = serde_json::from_str(&content)
            .map_err(|e| VeracityError::data(format!("malformed dataset record: {e}")))?;

        if headlines.is_empty() {
            return Err(VeracityError::data("dataset contains no records"));
        }

        Ok(Corpus { headlines })
    }

    /// Number of headlines in the corpus.
    pub fn len(&self) -> usize {
        self.headlines.len()
    }

    /// Check if the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.headlines.is_empty()
    }

    /// All headlines, in load order.
    pub fn headlines(&self) -> &[Headline] {
        &self.headlines
    }

    /// Iterate over headlines.
    pub fn iter(&self) -> impl Iterator<Item = &Headline> {
        self.headlines.iter()
    }

    /// Split the corpus into parallel title and label vectors.
    ///
    /// This is the shape the training entry point feeds into the evaluator
    /// and the classification pipeline.
    pub fn titles_and_labels(&self) -> (Vec<String>, Vec<Label>) {
        let titles = self.headlines.iter().map(|h| h.title.clone()).collect();
        let labels = self.headlines.iter().map(|h| h.label).collect();
        (titles, labels)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Headline;
    type IntoIter = std::slice::Iter<'a, Headline>;

    fn into_iter(self) -> Self::IntoIter {
        self.headlines.iter()
    }
}
