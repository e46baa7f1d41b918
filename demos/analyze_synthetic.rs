use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};
use riskmeasure::prices::{ReturnStats, price_relatives};
use riskmeasure::report::{render_summary, render_text};
use riskmeasure::{RiskDetector, RiskReport, plot};
use std::error::Error;

/// Compound Gaussian returns into a close series starting at 100
fn synthetic_closes(size: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).unwrap();
    let mut closes = vec![100.0];
    for _ in 0..size {
        let last = closes[closes.len() - 1];
        closes.push(last * (1.0 + normal.sample(&mut rng)));
    }
    closes
}

/// Closes that flip back and forth around a level
fn mean_reverting_closes(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.5).unwrap();
    (0..=size)
        .map(|t| {
            let swing = if t % 2 == 0 { 2.0 } else { -2.0 };
            100.0 + swing + noise.sample(&mut rng)
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let detector = RiskDetector::default();

    let closes = [
        ("calm", synthetic_closes(750, 0.0003, 0.01, 1)),
        ("volatile", synthetic_closes(750, 0.0, 0.04, 2)),
        ("reverting", mean_reverting_closes(750, 3)),
    ];

    let mut series = Vec::new();
    for (name, c) in &closes {
        series.push((name.to_string(), price_relatives(c)?));
    }

    let mut reports: Vec<(String, RiskReport)> = Vec::new();
    for ((name, result), (_, returns)) in detector.analyze_batch(&series).into_iter().zip(&series) {
        let report = result?;
        let stats = ReturnStats::of(returns);
        let thresholds = &detector.config().thresholds;
        println!("{}", render_text(&name, &report, stats.as_ref(), thresholds));
        reports.push((name, report));
    }
    println!("{}", render_summary(&reports));

    // Chart for the first series
    let (name, c) = &closes[0];
    let out = std::env::temp_dir().join(format!("risk_{name}.png"));
    plot::render_risk_chart(&out, name, c, &series[0].1, &reports[0].1)?;
    println!("Chart written to {}", out.display());
    Ok(())
}
