//! Dominant-cycle scan over a regime-switching series.
//!
//! Run with: `cargo run --example dominant_cycle`

use mesa_cycles::indicators::{dc_period, sine_wave};

fn main() {
    // 200 bars of a 20-bar cycle followed by 200 bars of a 34-bar cycle.
    let mut prices: Vec<f64> = (0..200)
        .map(|i| 100.0 + 10.0 * (i as f64 * std::f64::consts::TAU / 20.0).sin())
        .collect();
    prices.extend(
        (200..400).map(|i| 100.0 + 10.0 * (i as f64 * std::f64::consts::TAU / 34.0).sin()),
    );

    let period = dc_period(&prices).expect("series is long enough");
    let wave = sine_wave(&prices).expect("series is long enough");

    println!("bar  price    dc_period  sine    lead_sine");
    for bar in (70..400).step_by(10) {
        println!(
            "{bar:>3}  {:>7.2}  {:>9.2}  {:>6.3}  {:>9.3}",
            prices[bar], period[bar], wave.sine[bar], wave.lead_sine[bar]
        );
    }

    let early = period[150];
    let late = period[390];
    println!();
    println!("measured cycle during first regime:  {early:.1} bars (true 20)");
    println!("measured cycle during second regime: {late:.1} bars (true 34)");
}
