// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Interface for scorers that rate vocabulary terms against a target class.
///
/// Implementors hold whatever corpus state they need and rate one
/// `(target_class, term)` pair per call. Batch scoring and ranking in
/// [`crate::scoring::batch`] are written against this trait.
pub trait TermScorer {
    /// Score a single term against a target class; higher means more
    /// informative.
    fn term_score(&self, target_class: &str, term: &str) -> f64;
}
