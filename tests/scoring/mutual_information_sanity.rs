use rstest::rstest;
use textmi::scoring::contingency::ContingencyTable;
use textmi::scoring::corpus::LabelledCorpus;
use textmi::scoring::error::ScoreError;
use textmi::scoring::mutual_information::{MutualInformationScorer, binary_log2, mutual_information};

use crate::test_helpers::{assert_relative_eq, independent_corpus, spam_corpus};

#[rstest]
#[case(8.0, 3.0)]
#[case(2.0, 1.0)]
#[case(1.0, 0.0)]
#[case(0.5, -1.0)]
#[case(0.0, 0.0)] // zero maps to a neutral contribution, not -inf
fn test_binary_log2(#[case] x: f64, #[case] expected: f64) {
    assert_eq!(binary_log2(x), expected);
}

/// "buy" appears in every spam document and no ham document over a balanced
/// four-document corpus: exactly one bit of information.
#[test]
fn test_perfect_separation_scores_one_bit() {
    let scorer = MutualInformationScorer::new(spam_corpus());
    assert_eq!(scorer.table("spam", "buy"), ContingencyTable::from_counts(2, 0, 0, 2));
    assert_eq!(scorer.score("spam", "buy"), 1.0);
}

/// When the word perfectly predicts the class (N10 = N01 = 0), the sum
/// collapses to the marginal-only terms
/// `(N1x/N)*log2(N/N1x) + (N0x/N)*log2(N/N0x)`.
#[test]
fn test_perfect_predictor_reduces_to_marginal_terms() {
    let documents = ["win money", "win big", "win now", "hello"];
    let labels = ["spam", "spam", "spam", "ham"];
    let mi = mutual_information(&documents, &labels, "spam", "win").unwrap();
    let expected = 0.75 * (4.0_f64 / 3.0).log2() + 0.25 * 4.0_f64.log2();
    assert_relative_eq!(mi, expected, epsilon = 1e-15);
}

/// Plug-in MI over a fully populated table equals the entropy identity
/// I = H(word) + H(class) - H(word, class), computed here through an
/// independent code path.
#[rstest]
#[case(5, 3, 2, 7)]
#[case(1, 1, 1, 1)]
#[case(10, 2, 3, 9)]
#[case(2, 8, 5, 1)]
#[case(40, 17, 23, 61)]
fn test_matches_entropy_identity(
    #[case] n11: u64,
    #[case] n10: u64,
    #[case] n01: u64,
    #[case] n00: u64,
) {
    fn entropy_bits(probabilities: &[f64]) -> f64 {
        probabilities
            .iter()
            .filter(|&&p| p > 0.0)
            .map(|&p| -p * p.log2())
            .sum()
    }

    let table = ContingencyTable::from_counts(n11, n10, n01, n00);
    let n = table.n() as f64;
    let p11 = n11 as f64 / n;
    let p10 = n10 as f64 / n;
    let p01 = n01 as f64 / n;
    let p00 = n00 as f64 / n;

    let h_word = entropy_bits(&[p11 + p10, p01 + p00]);
    let h_class = entropy_bits(&[p11 + p01, p10 + p00]);
    let h_joint = entropy_bits(&[p11, p10, p01, p00]);

    assert_relative_eq!(
        table.mutual_information(),
        h_word + h_class - h_joint,
        epsilon = 1e-12
    );
}

/// With balanced labels and class-independent word occurrence, the score
/// shrinks toward zero as the corpus grows.
#[rstest]
#[case(1_000, 0.02, 21)]
#[case(1_000, 0.02, 22)]
#[case(10_000, 0.005, 23)]
fn test_independent_word_scores_near_zero(
    #[case] size: usize,
    #[case] bound: f64,
    #[case] seed: u64,
) {
    let (documents, labels) = independent_corpus(size, 0.4, seed);
    let mi = mutual_information(&documents, &labels, "pos", "marker").unwrap();
    assert!(mi > -1e-12, "plug-in MI should not be negative, got {mi}");
    assert!(mi < bound, "expected near-zero MI for N={size}, got {mi}");
}

/// Pure function of its inputs: repeated calls are bit-identical.
#[test]
fn test_scoring_is_idempotent() {
    let (documents, labels) = independent_corpus(500, 0.3, 77);
    let first = mutual_information(&documents, &labels, "pos", "marker").unwrap();
    let second = mutual_information(&documents, &labels, "pos", "marker").unwrap();
    assert_eq!(first.to_bits(), second.to_bits());

    let corpus = LabelledCorpus::new(documents, labels).unwrap();
    let scorer = MutualInformationScorer::new(corpus);
    assert_eq!(
        scorer.score("pos", "marker").to_bits(),
        scorer.score("pos", "marker").to_bits()
    );
}

#[test]
fn test_length_mismatch_fails_fast() {
    let documents = ["one", "two"];
    let labels = ["spam", "ham", "spam"];
    assert_eq!(
        mutual_information(&documents, &labels, "spam", "one"),
        Err(ScoreError::LengthMismatch {
            documents: 2,
            labels: 3,
        })
    );
    // Same check at corpus construction.
    assert_eq!(
        LabelledCorpus::new(vec!["one".into()], vec![]).unwrap_err(),
        ScoreError::LengthMismatch {
            documents: 1,
            labels: 0,
        }
    );
}
