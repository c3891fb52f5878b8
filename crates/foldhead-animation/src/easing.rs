//! Easing curves matching the Material motion presets.

/// Easing functions applied to a linear time fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// No easing.
    LinearEasing,
    /// Symmetric cubic ease in and out.
    EaseInOut,
    /// Material standard curve: quick start, long gentle settle.
    FastOutSlowInEasing,
    /// Material deceleration curve.
    LinearOutSlowInEasing,
    /// Material acceleration curve.
    FastOutLinearInEasing,
}

impl Easing {
    /// Maps a linear fraction in `[0, 1]` onto the curve.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0).solve(fraction),
            Easing::FastOutSlowInEasing => CubicBezier::new(0.4, 0.0, 0.2, 1.0).solve(fraction),
            Easing::LinearOutSlowInEasing => CubicBezier::new(0.0, 0.0, 0.2, 1.0).solve(fraction),
            Easing::FastOutLinearInEasing => CubicBezier::new(0.4, 0.0, 1.0, 1.0).solve(fraction),
        }
    }
}

/// Cubic bezier through (0,0) and (1,1) with two control points, in
/// polynomial form `((a * t + b) * t + c) * t` per axis.
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    x: [f32; 3],
    y: [f32; 3],
}

impl CubicBezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: Self::coefficients(x1, x2),
            y: Self::coefficients(y1, y2),
        }
    }

    fn coefficients(p1: f32, p2: f32) -> [f32; 3] {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        [a, b, c]
    }

    fn sample([a, b, c]: [f32; 3], t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn slope([a, b, c]: [f32; 3], t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    fn solve(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y, self.parameter_for_x(fraction))
    }

    /// Finds the curve parameter whose x equals `x`.
    fn parameter_for_x(&self, x: f32) -> f32 {
        const EPSILON: f32 = 1e-6;

        let mut t = x;
        for _ in 0..8 {
            let error = Self::sample(self.x, t) - x;
            if error.abs() < EPSILON {
                return t;
            }
            let slope = Self::slope(self.x, t);
            if slope.abs() < EPSILON {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        // Newton stalled on a flat segment; bisect instead.
        let (mut low, mut high) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..20 {
            let error = Self::sample(self.x, t) - x;
            if error.abs() < EPSILON {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::LinearEasing,
        Easing::EaseInOut,
        Easing::FastOutSlowInEasing,
        Easing::LinearOutSlowInEasing,
        Easing::FastOutLinearInEasing,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.transform(0.0).abs() < 1e-4, "{easing:?} start");
            assert!((easing.transform(1.0) - 1.0).abs() < 1e-4, "{easing:?} end");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut previous = 0.0;
            for step in 1..=100 {
                let value = easing.transform(step as f32 / 100.0);
                assert!(value + 1e-4 >= previous, "{easing:?} dipped at {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn fast_out_slow_in_leads_linear_at_midpoint() {
        let eased = Easing::FastOutSlowInEasing.transform(0.5);
        assert!(eased > 0.5, "expected ease to run ahead, got {eased}");
        assert!(eased < 1.0);
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let early = Easing::EaseInOut.transform(0.25);
        let late = Easing::EaseInOut.transform(0.75);
        assert!((early + late - 1.0).abs() < 1e-3);
    }
}
