//! Shared data generators for the integration tests.

#![allow(dead_code)]

use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A pure sine wave around `offset` with the given period in bars.
pub fn sine_series(len: usize, period: f64, amplitude: f64, offset: f64) -> Vec<f64> {
    (0..len)
        .map(|i| offset + amplitude * (i as f64 * std::f64::consts::TAU / period).sin())
        .collect()
}

/// A seeded random walk, always positive.
pub fn random_walk(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut price = 100.0_f64;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        price += rng.gen_range(-1.0..1.0);
        price = price.max(1.0);
        out.push(price);
    }
    out
}

/// Bitwise equality over a whole slice, NaNs included.
pub fn bits_equal(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
}
