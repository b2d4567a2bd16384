use textmi::scoring::batch::rank_terms;
use textmi::scoring::corpus::LabelledCorpus;
use textmi::scoring::mutual_information::{MutualInformationScorer, binary_log2};

fn main() {
    // Example labelled corpus - short newsletter snippets
    let corpus = LabelledCorpus::from_pairs([
        ("buy cheap meds now", "spam"),
        ("limited offer buy today", "spam"),
        ("team meeting at noon", "ham"),
        ("lunch plan for friday", "ham"),
        ("buy one get one free", "spam"),
        ("quarterly report attached", "ham"),
    ]);
    let scorer = MutualInformationScorer::new(corpus);

    // Calculate the score manually to verify
    let table = scorer.table("spam", "buy");
    let n = table.n() as f64;
    let cells = [
        (table.n11 as f64, table.word_present(), table.in_class()),
        (table.n01 as f64, table.word_absent(), table.in_class()),
        (table.n10 as f64, table.word_present(), table.out_of_class()),
        (table.n00 as f64, table.word_absent(), table.out_of_class()),
    ];
    let mut manual_mi = 0.0;
    for (cell, row, column) in cells {
        let denominator = (row * column) as f64;
        if denominator > 0.0 {
            manual_mi += (cell / n) * binary_log2((n * cell) / denominator);
        }
    }

    println!("Contingency table for (spam, buy): {table:?}");
    println!("Manual MI calculation: {manual_mi}");

    let library_mi = scorer.score("spam", "buy");
    println!("Library MI value: {library_mi}");
    println!("Comparison: Manual calculation vs. Library implementation");
    println!("  Manual: {manual_mi}");
    println!("  Library: {library_mi}");

    // Rank a small vocabulary for feature selection
    let vocabulary = ["buy", "meeting", "plan", "free", "report", "the"];
    println!("\nVocabulary ranked against class \"spam\":");
    for (term, score) in rank_terms(&scorer, "spam", &vocabulary) {
        println!("  {term:<10} {score:.6}");
    }
}
