//! MAMA/FAMA crossover walk-through on a trending, noisy series.
//!
//! Run with: `cargo run --example adaptive_average`

use mesa_cycles::indicators::{mama, mama_lookback};

fn main() {
    // Trend with a superimposed cycle: the adaptive pair should hug the
    // trend and cross only when it bends.
    let prices: Vec<f64> = (0..300)
        .map(|i| {
            let i = i as f64;
            let trend = if i < 150.0 { 100.0 + i * 0.4 } else { 160.0 - (i - 150.0) * 0.4 };
            trend + 3.0 * (i * std::f64::consts::TAU / 15.0).sin()
        })
        .collect();

    let out = mama(&prices).expect("series is long enough");

    let mut crossings = Vec::new();
    for i in mama_lookback() + 1..prices.len() {
        let before = out.mama[i - 1] - out.fama[i - 1];
        let after = out.mama[i] - out.fama[i];
        if before * after < 0.0 {
            crossings.push(i);
        }
    }

    println!("bar  price    mama     fama");
    for bar in (40..300).step_by(20) {
        println!(
            "{bar:>3}  {:>7.2}  {:>7.2}  {:>7.2}",
            prices[bar], out.mama[bar], out.fama[bar]
        );
    }
    println!();
    println!("mama/fama crossings at bars: {crossings:?}");
    println!("(the trend reverses at bar 150)");
}
