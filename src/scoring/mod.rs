pub mod batch;
pub mod contingency;
pub mod corpus;
pub mod error;
pub mod mutual_information;
pub mod traits;

pub use batch::{rank_terms, score_matrix};
pub use contingency::ContingencyTable;
pub use corpus::LabelledCorpus;
pub use error::{DegenerateTable, ScoreError};
pub use mutual_information::{MutualInformationScorer, binary_log2, mutual_information};
pub use traits::TermScorer;
