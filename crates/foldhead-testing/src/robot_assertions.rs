//! Assertion utilities for robot testing

use foldhead_ui_graphics::Dp;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_dp_approx_eq(actual: Dp, expected: Dp, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.0, expected.0, tolerance, msg);
}

/// Assert that every sample lies within `[low, high]`.
pub fn assert_all_within(samples: &[Dp], low: Dp, high: Dp, msg: &str) {
    for (index, sample) in samples.iter().enumerate() {
        assert!(
            *sample >= low && *sample <= high,
            "{}: sample {} = {} outside [{}, {}]",
            msg,
            index,
            sample.0,
            low.0,
            high.0
        );
    }
}

/// Assert that samples never move away from `target`.
pub fn assert_approaches(samples: &[Dp], target: Dp, msg: &str) {
    for (index, pair) in samples.windows(2).enumerate() {
        let before = (pair[0] - target).abs();
        let after = (pair[1] - target).abs();
        assert!(
            after <= before,
            "{}: moved away from {} at frame {} ({} -> {})",
            msg,
            target.0,
            index + 1,
            pair[0].0,
            pair[1].0
        );
    }
}
