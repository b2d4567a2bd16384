use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::Write;

use textmi::scoring::corpus::LabelledCorpus;
use textmi::scoring::mutual_information::{MutualInformationScorer, binary_log2};

/// Corpus where the marker word tracks the "pos" class up to a noise level.
fn generate_corpus(size: usize, noise: f64, seed: u64) -> LabelledCorpus {
    let mut rng = StdRng::seed_from_u64(seed);
    let pairs: Vec<(String, String)> = (0..size)
        .map(|i| {
            let positive = rng.gen_bool(0.5);
            let rate = if positive { 1.0 - noise } else { noise };
            let text = if rng.gen_bool(rate) {
                format!("item {i} marker")
            } else {
                format!("item {i}")
            };
            (text, if positive { "pos" } else { "neg" }.to_string())
        })
        .collect();
    LabelledCorpus::from_pairs(pairs)
}

/// Expected MI for balanced classes and a word that flips with probability
/// `noise`: one bit minus the binary entropy of the noise level.
fn theoretical_mi(noise: f64) -> f64 {
    1.0 + noise * binary_log2(noise) + (1.0 - noise) * binary_log2(1.0 - noise)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parameters
    let size = 20_000;
    let seed = 21354;

    // Noise sweep from perfect predictor to coin flip
    let noise_levels: Vec<f64> = (0..26).map(|x| x as f64 * 0.02).collect();

    // Store results
    let mut results = Vec::new();

    // Create CSV file for results
    let mut csv_file = File::create("mi_noise_sweep.csv")?;
    writeln!(csv_file, "noise,empirical_mi,theoretical_mi")?;

    for &noise in &noise_levels {
        let corpus = generate_corpus(size, noise, seed);
        let scorer = MutualInformationScorer::new(corpus);
        let empirical = scorer.score("pos", "marker");
        let theoretical = theoretical_mi(noise);

        results.push((noise, empirical, theoretical));
        writeln!(csv_file, "{},{},{}", noise, empirical, theoretical)?;
        println!(
            "Noise: {:.2}, Empirical: {:.6}, Theoretical: {:.6}",
            noise, empirical, theoretical
        );
    }

    // Create plot
    let root = BitMapBackend::new("mi_noise_sweep.png", (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Mutual Information vs. Label Noise",
            ("sans-serif", 30).into_font(),
        )
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0f64..0.5f64, 0f64..1.1f64)?;

    chart
        .configure_mesh()
        .x_desc("Noise level")
        .y_desc("Mutual information (bits)")
        .draw()?;

    // Plot empirical scores
    chart
        .draw_series(LineSeries::new(
            results.iter().map(|(x, e, _)| (*x, *e)),
            &RED,
        ))?
        .label("Empirical")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    // Plot theoretical curve
    chart
        .draw_series(LineSeries::new(
            results.iter().map(|(x, _, t)| (*x, *t)),
            &BLUE,
        ))?
        .label("Theoretical")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    println!("\nResults saved to:");
    println!("- mi_noise_sweep.csv");
    println!("- mi_noise_sweep.png");

    Ok(())
}
