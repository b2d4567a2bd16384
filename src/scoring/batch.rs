// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array2;
use tracing::debug;

use crate::scoring::traits::TermScorer;

/// Score every vocabulary term against every target class.
///
/// Returns a `(vocabulary.len(), target_classes.len())` matrix where entry
/// `[i, j]` is the score of term `i` against class `j`. The grid is computed
/// in one synchronous pass; each pair costs a full corpus scan.
pub fn score_matrix<S, C, V>(scorer: &S, target_classes: &[C], vocabulary: &[V]) -> Array2<f64>
where
    S: TermScorer,
    C: AsRef<str>,
    V: AsRef<str>,
{
    let mut scores = Array2::zeros((vocabulary.len(), target_classes.len()));
    for (j, class) in target_classes.iter().enumerate() {
        debug!(
            target_class = class.as_ref(),
            terms = vocabulary.len(),
            "scoring vocabulary against class"
        );
        for (i, term) in vocabulary.iter().enumerate() {
            scores[[i, j]] = scorer.term_score(class.as_ref(), term.as_ref());
        }
    }
    scores
}

/// Rank a vocabulary against one target class, best first.
///
/// The sort is stable, with float comparison via `total_cmp`, so ties keep
/// their original vocabulary order and the result is deterministic for a
/// given input.
pub fn rank_terms<S, V>(scorer: &S, target_class: &str, vocabulary: &[V]) -> Vec<(String, f64)>
where
    S: TermScorer,
    V: AsRef<str>,
{
    let mut ranked: Vec<(String, f64)> = vocabulary
        .iter()
        .map(|term| {
            let term = term.as_ref();
            (term.to_string(), scorer.term_score(target_class, term))
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}
