use crate::scoring::error::ScoreError;

/// An index-aligned pair of document texts and class-label strings.
///
/// `labels()[i]` carries the class tag (or tags) of `documents()[i]`. A label
/// string may hold several tags at once (e.g. `"politics|economy"`); class
/// membership is tested by substring containment, so any label that contains
/// the target-class string counts as a member.
#[derive(Debug, Clone)]
pub struct LabelledCorpus {
    documents: Vec<String>,
    labels: Vec<String>,
}

impl LabelledCorpus {
    /// Build a corpus from aligned document and label vectors.
    ///
    /// Fails with [`ScoreError::LengthMismatch`] when the vectors differ in
    /// length. An instance therefore always satisfies the alignment
    /// invariant.
    pub fn new(documents: Vec<String>, labels: Vec<String>) -> Result<Self, ScoreError> {
        if documents.len() != labels.len() {
            return Err(ScoreError::LengthMismatch {
                documents: documents.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { documents, labels })
    }

    /// Build a corpus from `(document, label)` pairs.
    pub fn from_pairs<D, L>(pairs: impl IntoIterator<Item = (D, L)>) -> Self
    where
        D: Into<String>,
        L: Into<String>,
    {
        let (documents, labels) = pairs
            .into_iter()
            .map(|(d, l)| (d.into(), l.into()))
            .unzip();
        Self { documents, labels }
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
