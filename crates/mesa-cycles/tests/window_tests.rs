//! Windowed calling-convention tests: aligned writes, reported ranges, and
//! input validation.

use mesa_cycles::indicators::{
    dc_period, dc_period_range_into, dc_phase_range_into, mama_range_into, phasor_range_into,
    sine_wave_range_into, trendline_range_into,
};
use mesa_cycles::{Error, OutputRange};

mod common;

const SENTINEL: f64 = -777.0;

#[test]
fn window_of_one_inside_lookback_is_empty_success() {
    let data = common::random_walk(500, 3);
    let mut out = vec![SENTINEL; 500];
    let range = dc_period_range_into(&data, 0, 0, &mut out).unwrap();
    assert_eq!(range, OutputRange::empty());
    assert_eq!(range.len(), 0);
    assert!(out.iter().all(|v| *v == SENTINEL));
}

#[test]
fn window_is_clipped_to_the_lookback() {
    let data = common::random_walk(200, 5);
    let mut out = vec![SENTINEL; 200];
    let range = dc_period_range_into(&data, 10, 80, &mut out).unwrap();
    assert_eq!(range, OutputRange { start: 32, end: 81 });
    assert!(out[..32].iter().all(|v| *v == SENTINEL));
    assert!(out[32..81].iter().all(|v| *v != SENTINEL));
    assert!(out[81..].iter().all(|v| *v == SENTINEL));
}

#[test]
fn aligned_writes_only_touch_the_reported_range() {
    let data = common::random_walk(300, 11);

    let mut out = vec![SENTINEL; 300];
    let range = dc_phase_range_into(&data, 100, 250, &mut out).unwrap();
    assert_eq!(range, OutputRange { start: 100, end: 251 });
    assert!(out[..100].iter().all(|v| *v == SENTINEL));
    assert!(out[100..251].iter().all(|v| v.is_finite() && *v != SENTINEL));
    assert!(out[251..].iter().all(|v| *v == SENTINEL));

    let mut i_out = vec![SENTINEL; 300];
    let mut q_out = vec![SENTINEL; 300];
    let range = phasor_range_into(&data, 100, 250, &mut i_out, &mut q_out).unwrap();
    assert_eq!(range.len(), 151);
    assert!(i_out[..100].iter().all(|v| *v == SENTINEL));
    assert!(q_out[251..].iter().all(|v| *v == SENTINEL));
}

#[test]
fn all_indicators_share_the_window_contract() {
    let data = common::random_walk(300, 13);
    let mut a = vec![SENTINEL; 300];
    let mut b = vec![SENTINEL; 300];

    assert_eq!(
        trendline_range_into(&data, 63, 299, &mut a).unwrap(),
        OutputRange { start: 63, end: 300 }
    );
    assert_eq!(
        sine_wave_range_into(&data, 63, 299, &mut a, &mut b).unwrap(),
        OutputRange { start: 63, end: 300 }
    );
    assert_eq!(
        mama_range_into(&data, 32, 299, 0.5, 0.05, &mut a, &mut b).unwrap(),
        OutputRange { start: 32, end: 300 }
    );
}

#[test]
fn inverted_window_is_rejected() {
    let data = common::random_walk(100, 17);
    let mut out = vec![0.0; 100];
    assert!(matches!(
        dc_period_range_into(&data, 50, 40, &mut out),
        Err(Error::WindowOutOfRange { start: 50, end: 40, len: 100 })
    ));
}

#[test]
fn window_past_the_end_is_rejected() {
    let data = common::random_walk(100, 19);
    let mut out = vec![0.0; 200];
    assert!(matches!(
        dc_period_range_into(&data, 0, 100, &mut out),
        Err(Error::WindowOutOfRange { .. })
    ));
}

#[test]
fn empty_input_is_rejected() {
    let data: Vec<f64> = Vec::new();
    let mut out = vec![0.0; 10];
    assert!(matches!(
        dc_period_range_into(&data, 0, 0, &mut out),
        Err(Error::EmptyInput)
    ));
}

#[test]
fn short_output_buffer_is_rejected() {
    let data = common::random_walk(100, 23);
    let mut out = vec![0.0; 99];
    assert!(matches!(
        dc_period_range_into(&data, 0, 99, &mut out),
        Err(Error::BufferTooSmall { required: 100, actual: 99, .. })
    ));
}

#[test]
fn whole_series_wrapper_matches_full_window() {
    let data = common::random_walk(300, 29);
    let wrapped = dc_period(&data).unwrap();

    let mut out = vec![f64::NAN; 300];
    let range = dc_period_range_into(&data, 0, 299, &mut out).unwrap();
    assert_eq!(range, OutputRange { start: 32, end: 300 });
    for i in 32..300 {
        assert_eq!(wrapped[i].to_bits(), out[i].to_bits(), "bar {i}");
    }
}

#[test]
fn same_window_is_deterministic() {
    let data = common::random_walk(400, 31);
    let mut a = vec![f64::NAN; 400];
    let mut b = vec![f64::NAN; 400];
    dc_phase_range_into(&data, 150, 350, &mut a).unwrap();
    dc_phase_range_into(&data, 150, 350, &mut b).unwrap();
    assert!(common::bits_equal(&a, &b));
}
