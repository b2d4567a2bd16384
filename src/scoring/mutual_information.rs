use crate::scoring::contingency::ContingencyTable;
use crate::scoring::corpus::LabelledCorpus;
use crate::scoring::error::{DegenerateTable, ScoreError};
use crate::scoring::traits::TermScorer;

/// Base-2 logarithm that treats zero as a neutral input.
///
/// `binary_log2(0.0)` is 0.0 rather than negative infinity, so zero-count
/// cells contribute nothing to a score instead of producing NaN.
pub fn binary_log2(x: f64) -> f64 {
    if x != 0.0 { x.log2() } else { 0.0 }
}

/// Mutual-information scorer over a fixed labelled corpus.
///
/// Holds the corpus and computes, per query, the mutual information between
/// "document is in the target class" and "document contains the word". Both
/// membership and presence are substring tests; see
/// [`ContingencyTable::tally`].
///
/// Scoring is read-only over the corpus, so one scorer can serve any number
/// of `(class, word)` queries, including concurrently from independent
/// callers.
pub struct MutualInformationScorer {
    corpus: LabelledCorpus,
}

impl MutualInformationScorer {
    pub fn new(corpus: LabelledCorpus) -> Self {
        Self { corpus }
    }

    /// The contingency table for one `(target_class, word)` pair.
    ///
    /// Each call scans the full corpus; tables are not cached.
    pub fn table(&self, target_class: &str, word: &str) -> ContingencyTable {
        ContingencyTable::tally(
            self.corpus.documents(),
            self.corpus.labels(),
            target_class,
            word,
        )
    }

    /// Mutual information for one pair, in bits.
    ///
    /// Total over all inputs: degenerate tables score 0.0 (see
    /// [`ContingencyTable::mutual_information`]).
    pub fn score(&self, target_class: &str, word: &str) -> f64 {
        self.table(target_class, word).mutual_information()
    }

    /// Mutual information with degenerate tables reported as errors.
    pub fn checked_score(
        &self,
        target_class: &str,
        word: &str,
    ) -> Result<f64, DegenerateTable> {
        self.table(target_class, word).checked_mutual_information()
    }

    /// The corpus this scorer was built over.
    pub fn corpus(&self) -> &LabelledCorpus {
        &self.corpus
    }
}

impl TermScorer for MutualInformationScorer {
    fn term_score(&self, target_class: &str, term: &str) -> f64 {
        self.score(target_class, term)
    }
}

/// Mutual information between class membership and word presence over
/// aligned document and label slices.
///
/// # Arguments
///
/// * `documents` - Document texts, one per index
/// * `class_labels` - Class-label strings, index-aligned with `documents`
/// * `target_class` - Class of interest; a label counts as a member when it
///   contains this string anywhere
/// * `word` - Term of interest; a document counts as containing it on any
///   substring match
///
/// # Returns
///
/// The mutual information in bits, or [`ScoreError::LengthMismatch`] when
/// the two slices differ in length. Degenerate tables score 0.0; callers
/// that need them surfaced should go through
/// [`ContingencyTable::checked_mutual_information`] or
/// [`MutualInformationScorer::checked_score`].
pub fn mutual_information<D, L>(
    documents: &[D],
    class_labels: &[L],
    target_class: &str,
    word: &str,
) -> Result<f64, ScoreError>
where
    D: AsRef<str>,
    L: AsRef<str>,
{
    if documents.len() != class_labels.len() {
        return Err(ScoreError::LengthMismatch {
            documents: documents.len(),
            labels: class_labels.len(),
        });
    }
    Ok(ContingencyTable::tally(documents, class_labels, target_class, word).mutual_information())
}
