use thiserror::Error;

/// Errors for malformed scoring inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Documents and class labels must be index-aligned; scoring fails fast
    /// on mismatched lengths rather than truncating to the shorter sequence.
    #[error("documents and class labels differ in length ({documents} vs {labels})")]
    LengthMismatch { documents: usize, labels: usize },
}

/// Classification of contingency tables whose four-term sum is not fully
/// defined.
///
/// Checked scoring paths return this as a typed error instead of overloading
/// the score range with sentinel values, so "no information computable" stays
/// distinguishable from a legitimate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DegenerateTable {
    /// No document is both in the target class and contains the word
    /// (N11 == 0). Covers the word or the class being absent entirely.
    #[error("no document in the target class contains the word")]
    EmptyCooccurrence,
    /// The class and word do co-occur, but some other cell of the table is
    /// empty.
    #[error("an empty contingency cell leaves part of the sum undefined")]
    EmptyCell,
}
