//! End-to-end behavioural scenarios.

use mesa_cycles::indicators::{
    dc_period, mama, mama_range_into, mama_with_limits, phasor, sine_wave, trendline,
};
use mesa_cycles::Error;

mod common;

#[test]
fn pure_sine_converges_to_its_period() {
    let data = common::sine_series(400, 20.0, 10.0, 100.0);
    let out = dc_period(&data).unwrap();
    for (i, v) in out.iter().enumerate().skip(150) {
        assert!(
            (v - 20.0).abs() < 2.0,
            "bar {i}: dominant period {v}, expected ~20"
        );
    }
}

#[test]
fn shorter_cycle_is_resolved_too() {
    let data = common::sine_series(400, 12.0, 8.0, 50.0);
    let out = dc_period(&data).unwrap();
    for (i, v) in out.iter().enumerate().skip(200) {
        assert!(
            (v - 12.0).abs() < 2.0,
            "bar {i}: dominant period {v}, expected ~12"
        );
    }
}

#[test]
fn constant_input_collapses_the_phasor_and_mama() {
    let data = vec![73.25_f64; 300];

    let pair = phasor(&data).unwrap();
    for i in 250..300 {
        assert!(pair.in_phase[i].abs() < 1e-8, "I at {i}: {}", pair.in_phase[i]);
        assert!(pair.quadrature[i].abs() < 1e-8, "Q at {i}: {}", pair.quadrature[i]);
    }

    let averages = mama(&data).unwrap();
    for i in 150..300 {
        assert!((averages.mama[i] - 73.25).abs() < 1e-9);
        assert!((averages.fama[i] - 73.25).abs() < 1e-9);
    }

    let trend = trendline(&data).unwrap();
    for i in 150..300 {
        assert!((trend[i] - 73.25).abs() < 1e-9);
    }
}

#[test]
fn parameter_error_leaves_buffers_untouched() {
    let data = common::sine_series(100, 20.0, 10.0, 100.0);
    let mut mama_out = vec![-1.0_f64; 100];
    let mut fama_out = vec![-1.0_f64; 100];

    let err = mama_range_into(&data, 0, 99, 1.5, 0.05, &mut mama_out, &mut fama_out).unwrap_err();
    assert!(matches!(err, Error::LimitOutOfRange { param: "fast_limit", .. }));
    assert!(mama_out.iter().all(|v| *v == -1.0));
    assert!(fama_out.iter().all(|v| *v == -1.0));

    assert!(matches!(
        mama_with_limits(&data, 0.5, 0.0),
        Err(Error::LimitOutOfRange { param: "slow_limit", .. })
    ));
}

#[test]
fn sine_outputs_cross_near_turning_points() {
    let data = common::sine_series(400, 20.0, 10.0, 100.0);
    let out = sine_wave(&data).unwrap();
    let mut crossings = 0;
    for i in 100..399 {
        let a = out.sine[i] - out.lead_sine[i];
        let b = out.sine[i + 1] - out.lead_sine[i + 1];
        if a * b < 0.0 {
            crossings += 1;
        }
    }
    // Roughly two crossings per 20-bar cycle over 300 bars.
    assert!(crossings >= 20, "only {crossings} crossings");
}

#[test]
fn repeat_calls_are_bit_identical() {
    let data = common::random_walk(500, 42);

    let a = dc_period(&data).unwrap();
    let b = dc_period(&data).unwrap();
    assert!(common::bits_equal(&a, &b));

    let m1 = mama(&data).unwrap();
    let m2 = mama(&data).unwrap();
    assert!(common::bits_equal(&m1.mama, &m2.mama));
    assert!(common::bits_equal(&m1.fama, &m2.fama));

    let s1 = sine_wave(&data).unwrap();
    let s2 = sine_wave(&data).unwrap();
    assert!(common::bits_equal(&s1.sine, &s2.sine));
    assert!(common::bits_equal(&s1.lead_sine, &s2.lead_sine));
}

#[test]
fn f32_and_f64_agree_loosely() {
    let data = common::sine_series(300, 20.0, 10.0, 100.0);
    let data32: Vec<f32> = data.iter().map(|v| *v as f32).collect();

    let wide = dc_period(&data).unwrap();
    let narrow = dc_period(&data32).unwrap();
    for i in 100..300 {
        assert!(
            (wide[i] - f64::from(narrow[i])).abs() < 0.5,
            "bar {i}: f64 {} vs f32 {}",
            wide[i],
            narrow[i]
        );
    }
}

#[test]
fn trendline_smooths_a_noisy_trend() {
    let mut data = common::random_walk(400, 7);
    for (i, v) in data.iter_mut().enumerate() {
        *v += i as f64 * 0.2;
    }
    let out = trendline(&data).unwrap();
    // The trendline must move far less bar-to-bar than the raw series does
    // on average.
    let raw_move: f64 = data[100..].windows(2).map(|w| (w[1] - w[0]).abs()).sum();
    let trend_move: f64 = out[100..].windows(2).map(|w| (w[1] - w[0]).abs()).sum();
    assert!(
        trend_move < raw_move,
        "trendline moved {trend_move} vs raw {raw_move}"
    );
}
