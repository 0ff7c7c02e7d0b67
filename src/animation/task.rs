use crate::pricing::round_price;

/// Decelerating curve: fast start, settles gently on the target.
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTask {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
    pub started_at: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationFrame {
    pub value: i64,
    pub done: bool,
}

impl AnimationTask {
    pub fn new(start: f64, end: f64, duration_ms: f64, started_at: f64) -> Self {
        Self { start, end, duration_ms, started_at }
    }

    /// Share of the duration elapsed at `now`, within `0.0..=1.0`.
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        // Frame timestamps can predate the task by a fraction of a frame.
        ((now - self.started_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn frame(&self, now: f64) -> AnimationFrame {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return AnimationFrame { value: round_price(self.end), done: true };
        }
        let eased = ease_out_cubic(progress);
        AnimationFrame {
            value: round_price(self.start + (self.end - self.start) * eased),
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn curve_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn lands_exactly_on_target() {
        let task = AnimationTask::new(0.0, 100.0, 500.0, 1_000.0);
        assert_eq!(task.frame(1_000.0), AnimationFrame { value: 0, done: false });
        assert_eq!(task.frame(1_250.0), AnimationFrame { value: 88, done: false });
        assert_eq!(task.frame(1_500.0), AnimationFrame { value: 100, done: true });
        assert_eq!(task.frame(9_999.0), AnimationFrame { value: 100, done: true });
    }

    #[test]
    fn counts_down_as_well_as_up() {
        let task = AnimationTask::new(29.0, 23.0, 300.0, 0.0);
        assert_eq!(task.frame(0.0).value, 29);
        assert_eq!(task.frame(300.0).value, 23);
    }

    #[test]
    fn early_timestamps_hold_the_start_value() {
        let task = AnimationTask::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(task.progress(40.0), 0.0);
        assert_eq!(task.frame(40.0).value, 10);
    }

    #[test]
    fn zero_duration_finishes_on_first_frame() {
        let task = AnimationTask::new(0.0, 42.0, 0.0, 0.0);
        assert_eq!(task.frame(0.0), AnimationFrame { value: 42, done: true });
    }

    proptest! {
        #[test]
        fn rising_values_never_step_back(
            start in -1_000i64..1_000,
            delta in 1i64..5_000,
            duration in 16.0f64..2_000.0,
            mut times in proptest::collection::vec(0.0f64..3_000.0, 1..60),
        ) {
            let end = start + delta;
            let task = AnimationTask::new(start as f64, end as f64, duration, 0.0);
            times.sort_by(|a, b| a.total_cmp(b));
            let mut last = start;
            for t in times {
                let value = task.frame(t).value;
                prop_assert!(value >= last);
                prop_assert!(value <= end);
                last = value;
            }
        }
    }
}
