//! Unstable-period configuration tests.
//!
//! The table is process-wide, so these tests live in their own binary and
//! serialise on a mutex; each one restores the defaults before returning.

use std::sync::Mutex;

use mesa_cycles::indicators::{
    dc_period, dc_period_lookback, dc_period_range_into, dc_phase_lookback, mama_lookback,
    phasor_lookback, sine_wave_lookback, trendline_lookback,
};
use mesa_cycles::settings::{set_unstable_period, set_unstable_period_all, CycleIndicator};
use mesa_cycles::utils::count_nan_prefix;

mod common;

static TABLE_LOCK: Mutex<()> = Mutex::new(());

fn with_clean_table(test: impl FnOnce()) {
    let _guard = TABLE_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    set_unstable_period_all(0);
    test();
    set_unstable_period_all(0);
}

#[test]
fn lookback_grows_with_the_setting() {
    with_clean_table(|| {
        assert_eq!(dc_period_lookback(), 32);
        let mut previous = dc_period_lookback();
        for bars in [1, 5, 20, 100] {
            set_unstable_period(CycleIndicator::DcPeriod, bars);
            let lookback = dc_period_lookback();
            assert_eq!(lookback, 32 + bars);
            assert!(lookback > previous);
            previous = lookback;
        }
    });
}

#[test]
fn each_indicator_reads_its_own_slot() {
    with_clean_table(|| {
        set_unstable_period(CycleIndicator::SineWave, 9);
        assert_eq!(sine_wave_lookback(), 63 + 9);
        // Its siblings are unaffected.
        assert_eq!(dc_phase_lookback(), 63);
        assert_eq!(trendline_lookback(), 63);
        assert_eq!(phasor_lookback(), 32);
        assert_eq!(mama_lookback(), 32);
    });
}

#[test]
fn set_all_touches_every_indicator() {
    with_clean_table(|| {
        set_unstable_period_all(7);
        assert_eq!(dc_period_lookback(), 39);
        assert_eq!(phasor_lookback(), 39);
        assert_eq!(mama_lookback(), 39);
        assert_eq!(dc_phase_lookback(), 70);
        assert_eq!(sine_wave_lookback(), 70);
        assert_eq!(trendline_lookback(), 70);
    });
}

#[test]
fn nan_prefix_tracks_the_widened_lookback() {
    with_clean_table(|| {
        let data = common::random_walk(200, 37);
        set_unstable_period(CycleIndicator::DcPeriod, 10);
        let out = dc_period(&data).unwrap();
        assert_eq!(count_nan_prefix(&out), 42);
        assert!(out[42..].iter().all(|v| v.is_finite()));
    });
}

#[test]
fn widened_lookback_shifts_the_empty_window_boundary() {
    with_clean_table(|| {
        let data = common::random_walk(200, 41);
        set_unstable_period(CycleIndicator::DcPeriod, 10);

        let mut out = vec![f64::NAN; 200];
        let range = dc_period_range_into(&data, 0, 41, &mut out).unwrap();
        assert!(range.is_empty());

        let range = dc_period_range_into(&data, 42, 42, &mut out).unwrap();
        assert_eq!(range.len(), 1);
        assert_eq!(range.start, 42);
    });
}

#[test]
fn extra_warmup_changes_early_output_only_mildly() {
    // Widening the warm-up must still produce in-range values from the very
    // first reported bar.
    with_clean_table(|| {
        let data = common::sine_series(300, 20.0, 10.0, 100.0);
        set_unstable_period(CycleIndicator::DcPeriod, 50);
        let out = dc_period(&data).unwrap();
        assert_eq!(count_nan_prefix(&out), 82);
        for v in &out[82..] {
            assert!(*v >= 6.0 - 1e-9 && *v <= 50.0 + 1e-9);
        }
    });
}
