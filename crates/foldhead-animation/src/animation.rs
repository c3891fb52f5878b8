use crate::easing::Easing;
use foldhead_ui_graphics::Dp;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Dp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Dp(self.0.lerp(&target.0, fraction))
    }
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Eased fraction after `elapsed_nanos`, and whether the tween has finished.
    pub fn fraction_at(&self, elapsed_nanos: u64) -> (f32, bool) {
        let delay_nanos = self.delay_millis.saturating_mul(1_000_000);
        if elapsed_nanos < delay_nanos {
            return (0.0, false);
        }
        let duration_nanos = self.duration_millis.saturating_mul(1_000_000).max(1);
        let linear = ((elapsed_nanos - delay_nanos) as f64 / duration_nanos as f64).min(1.0) as f32;
        (self.easing.transform(linear), linear >= 1.0)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// What a tween produced for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum TweenFrame<T> {
    /// Mid-flight value.
    Running(T),
    /// Final frame; the value is exactly the target.
    Finished(T),
    /// The frame belongs to a superseded or stopped run and must be ignored.
    Stale,
}

/// A restartable tween between two values.
///
/// Every [`TweenAnimation::start`] bumps a generation counter. Frame
/// callbacks capture the generation they were scheduled for and pass it back
/// to [`TweenAnimation::sample`]; a sample from an older run yields
/// [`TweenFrame::Stale`], so a superseded run can never write its value.
#[derive(Debug, Clone)]
pub struct TweenAnimation<T> {
    start: T,
    target: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    generation: u64,
    running: bool,
}

impl<T: Lerp + Clone> TweenAnimation<T> {
    /// An idle animation resting at `value`.
    pub fn idle(value: T) -> Self {
        Self {
            start: value.clone(),
            target: value,
            spec: AnimationSpec::default(),
            start_time_nanos: None,
            generation: 0,
            running: false,
        }
    }

    /// Starts a new run from `from` to `target`, superseding any run in flight.
    ///
    /// The start time is taken from the first frame sampled afterwards.
    /// Returns the generation that frames for this run must present.
    pub fn start(&mut self, from: T, target: T, spec: AnimationSpec) -> u64 {
        self.generation += 1;
        self.start = from;
        self.target = target;
        self.spec = spec;
        self.start_time_nanos = None;
        self.running = true;
        log::trace!(
            "tween #{} started ({}ms)",
            self.generation,
            self.spec.duration_millis
        );
        self.generation
    }

    /// Stops the current run; frames already scheduled for it become stale.
    pub fn stop(&mut self) {
        if self.running {
            log::trace!("tween #{} stopped", self.generation);
            self.generation += 1;
            self.running = false;
        }
    }

    pub fn sample(&mut self, generation: u64, frame_time_nanos: u64) -> TweenFrame<T> {
        if !self.running || generation != self.generation {
            return TweenFrame::Stale;
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let (fraction, finished) = self
            .spec
            .fraction_at(frame_time_nanos.saturating_sub(start_time));

        if finished {
            self.running = false;
            self.start = self.target.clone();
            self.start_time_nanos = None;
            return TweenFrame::Finished(self.target.clone());
        }
        TweenFrame::Running(self.start.lerp(&self.target, fraction))
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
