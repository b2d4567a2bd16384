// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # textmi
//!
//! Mutual-information feature scoring for text classification: given a corpus
//! of labelled documents, score how much information the presence of a word
//! carries about membership in a target class.
//!
//! ## Quick Start
//!
//! ```rust
//! use textmi::scoring::corpus::LabelledCorpus;
//! use textmi::scoring::mutual_information::MutualInformationScorer;
//!
//! let corpus = LabelledCorpus::new(
//!     vec!["buy now".into(), "hello friend".into(), "buy cheap".into(), "dinner plan".into()],
//!     vec!["spam".into(), "ham".into(), "spam".into(), "ham".into()],
//! ).unwrap();
//!
//! let scorer = MutualInformationScorer::new(corpus);
//! // "buy" perfectly separates spam from ham: one full bit of information.
//! assert_eq!(scorer.score("spam", "buy"), 1.0);
//! ```
//!
//! ## How scoring works
//!
//! For each `(target_class, word)` pair the scorer tallies a 2x2 contingency
//! table over the corpus (in class / out of class × word present / word
//! absent) and evaluates the standard mutual-information sum over its four
//! cells, in bits.
//!
//! Both tests are **raw substring containment**: a label counts as a class
//! member when it contains the target-class string anywhere, and a document
//! counts as containing the word on any substring match. This keeps labels
//! free-form (one label string can carry several tags) but is a sharp edge:
//! `"nonspam"` matches class `"spam"`, and `"category"` matches word `"cat"`.
//! Callers who need exact or token-level matching must pre-process their
//! inputs.
//!
//! ## Degenerate tables
//!
//! Tables with empty cells cannot support the full four-term sum. The plain
//! scoring paths are total: terms with zero-denominator marginal products are
//! skipped, and a table where nothing qualifies scores 0.0. The `checked_*`
//! paths instead report such tables as [`DegenerateTable`] errors, keeping
//! "no information computable" distinguishable from a legitimate score.
//!
//! [`DegenerateTable`]: scoring::error::DegenerateTable
//!
//! ## Batch scoring
//!
//! [`scoring::batch`] rates a whole vocabulary against one or more target
//! classes (a score matrix, or a ranked term list) for feature selection.

pub mod scoring;
