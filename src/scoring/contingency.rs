use crate::scoring::error::DegenerateTable;
use crate::scoring::mutual_information::binary_log2;

/// 2x2 joint occurrence counts for one `(target_class, word)` pair.
///
/// Cell subscripts follow the usual feature-selection convention: the first
/// index is word presence, the second class membership. Counts are held
/// exactly as integers; the score formula converts to `f64` only at
/// evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContingencyTable {
    /// Documents in the target class that contain the word
    pub n11: u64,
    /// Documents outside the target class that contain the word
    pub n10: u64,
    /// Documents in the target class without the word
    pub n01: u64,
    /// Documents outside the target class without the word
    pub n00: u64,
}

impl ContingencyTable {
    /// Tally the table for one `(target_class, word)` pair over aligned
    /// document and label slices.
    ///
    /// Both tests are raw substring containment: a label that contains
    /// `target_class` anywhere counts as membership (`"nonspam"` matches
    /// class `"spam"`), and a document that contains `word` anywhere counts
    /// as presence (`"category"` matches `"cat"`).
    ///
    /// Exactly one cell is incremented per index, so the four cells always
    /// sum to the corpus size.
    pub fn tally<D, L>(documents: &[D], labels: &[L], target_class: &str, word: &str) -> Self
    where
        D: AsRef<str>,
        L: AsRef<str>,
    {
        assert_eq!(
            documents.len(),
            labels.len(),
            "Documents and labels must be index-aligned for tallying"
        );
        let mut table = Self::from_counts(0, 0, 0, 0);
        for (document, label) in documents.iter().zip(labels.iter()) {
            let in_class = label.as_ref().contains(target_class);
            let has_word = document.as_ref().contains(word);
            match (has_word, in_class) {
                (true, true) => table.n11 += 1,
                (true, false) => table.n10 += 1,
                (false, true) => table.n01 += 1,
                (false, false) => table.n00 += 1,
            }
        }
        table
    }

    /// Build a table directly from the four cell counts.
    pub fn from_counts(n11: u64, n10: u64, n01: u64, n00: u64) -> Self {
        Self { n11, n10, n01, n00 }
    }

    /// Total number of documents.
    pub fn n(&self) -> u64 {
        self.n11 + self.n10 + self.n01 + self.n00
    }

    /// Documents containing the word (N1x).
    pub fn word_present(&self) -> u64 {
        self.n11 + self.n10
    }

    /// Documents without the word (N0x).
    pub fn word_absent(&self) -> u64 {
        self.n01 + self.n00
    }

    /// Documents in the target class (Nx1).
    pub fn in_class(&self) -> u64 {
        self.n11 + self.n01
    }

    /// Documents outside the target class (Nx0).
    pub fn out_of_class(&self) -> u64 {
        self.n10 + self.n00
    }

    /// Classify the table when its four-term sum is not fully defined.
    ///
    /// Returns `None` for fully populated tables. An empty `n11` cell is
    /// reported as [`DegenerateTable::EmptyCooccurrence`]; any other empty
    /// cell as [`DegenerateTable::EmptyCell`].
    pub fn degeneracy(&self) -> Option<DegenerateTable> {
        if self.n11 == 0 {
            Some(DegenerateTable::EmptyCooccurrence)
        } else if self.n10 == 0 || self.n01 == 0 || self.n00 == 0 {
            Some(DegenerateTable::EmptyCell)
        } else {
            None
        }
    }

    /// Mutual information between word presence and class membership, in
    /// bits.
    ///
    /// Sums `(Ncell/N) * log2(N*Ncell / (row_marginal * col_marginal))` over
    /// the four cells, skipping any term whose marginal product is zero.
    /// Empty cells inside a qualifying term contribute nothing because
    /// [`binary_log2`] maps 0 to 0. A table where no term qualifies scores
    /// 0.0, so this function is total; use
    /// [`checked_mutual_information`](Self::checked_mutual_information) to
    /// make degenerate tables observable.
    pub fn mutual_information(&self) -> f64 {
        let n = self.n() as f64;
        let n11 = self.n11 as f64;
        let n10 = self.n10 as f64;
        let n01 = self.n01 as f64;
        let n00 = self.n00 as f64;
        let n1x = n11 + n10;
        let n0x = n01 + n00;
        let nx1 = n11 + n01;
        let nx0 = n10 + n00;

        let mut mi = 0.0_f64;
        if n1x * nx1 > 0.0 {
            mi += (n11 / n) * binary_log2((n * n11) / (n1x * nx1));
        }
        if n0x * nx1 > 0.0 {
            mi += (n01 / n) * binary_log2((n * n01) / (n0x * nx1));
        }
        if n1x * nx0 > 0.0 {
            mi += (n10 / n) * binary_log2((n * n10) / (n1x * nx0));
        }
        if n0x * nx0 > 0.0 {
            mi += (n00 / n) * binary_log2((n * n00) / (n0x * nx0));
        }
        mi
    }

    /// Like [`mutual_information`](Self::mutual_information), but degenerate
    /// tables come back as a typed error instead of folding into the score
    /// range.
    pub fn checked_mutual_information(&self) -> Result<f64, DegenerateTable> {
        match self.degeneracy() {
            Some(kind) => Err(kind),
            None => Ok(self.mutual_information()),
        }
    }
}
