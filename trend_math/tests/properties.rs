use proptest::prelude::*;
use trend_math::{
    first_order_change, project, projected_len, select_scale, smooth, MathError,
    DEFAULT_SMOOTHING_WINDOW,
};

proptest! {
    #[test]
    fn smoothed_length_matches_window(
        series in prop::collection::vec(0u64..1_000_000, 1..200),
        window in 1usize..40,
    ) {
        let smoothed = smooth(&series, window).unwrap();
        if window <= series.len() {
            prop_assert_eq!(smoothed.len(), series.len() - window + 1);
        } else {
            prop_assert!(smoothed.is_empty());
        }
    }

    #[test]
    fn smoothed_values_stay_within_window(
        series in prop::collection::vec(0u64..1_000_000, 1..200),
        window in 1usize..40,
    ) {
        let smoothed = smooth(&series, window).unwrap();
        for (i, value) in smoothed.iter().enumerate() {
            let span = &series[i..i + window];
            let min = *span.iter().min().unwrap() as f64;
            let max = *span.iter().max().unwrap() as f64;
            prop_assert!(*value >= min && *value <= max);
        }
    }

    #[test]
    fn constant_series_smooths_to_constant(
        k in 0u64..1_000_000,
        len in 1usize..100,
        window in 1usize..100,
    ) {
        prop_assume!(window <= len);
        let smoothed = smooth(&vec![k; len], window).unwrap();
        prop_assert!(smoothed.iter().all(|v| *v == k as f64));
    }

    #[test]
    fn scale_is_at_least_one(series in prop::collection::vec(0u64..10_000_000, 1..100)) {
        prop_assert!(select_scale(&series).unwrap() >= 1);
    }

    #[test]
    fn projection_length_rounds_up_to_groups(
        seed in -1_000.0f64..1_000_000.0,
        horizon in 0usize..200,
        velocity in -500.0f64..500.0,
        acceleration in -50.0f64..50.0,
    ) {
        let projection = project(seed, horizon, velocity, acceleration).unwrap();
        prop_assert_eq!(projection.len(), 3 * horizon.div_ceil(3));
        prop_assert_eq!(projection.len(), projected_len(horizon));
    }
}

#[test]
fn scale_of_flat_thousand_is_twenty() {
    assert_eq!(select_scale(&[1000; 30]).unwrap(), 20);
}

#[test]
fn short_smoothed_tail_has_no_velocity() {
    let tail = [10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0];
    assert!(matches!(
        first_order_change(&tail),
        Err(MathError::InsufficientData(_))
    ));
}

#[test]
fn unit_ramp_velocity_uses_length_divisor() {
    let tail: Vec<f64> = (0..9).map(|i| i as f64).collect();
    assert_eq!(first_order_change(&tail).unwrap(), 7.0 / 8.0);
}

#[test]
fn full_pipeline_on_linear_growth() {
    // 40 days growing by 10 a day
    let raw: Vec<u64> = (0..40).map(|d| 100 + d * 10).collect();
    let smoothed = smooth(&raw, DEFAULT_SMOOTHING_WINDOW).unwrap();
    assert_eq!(smoothed.len(), 26);

    let trend = trend_math::TrendEstimate::from_smoothed(&smoothed).unwrap();
    // 7 differences of 10 over 25
    assert!((trend.velocity - 70.0 / 25.0).abs() < 1e-9);
    assert!(trend.acceleration.abs() < 1e-9);

    let seed = *raw.last().unwrap() as f64;
    let projection = project(seed, 3, trend.velocity, trend.acceleration).unwrap();
    assert_eq!(projection, vec![492, 494, 496]);
}
