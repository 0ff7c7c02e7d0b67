use std::ops::ControlFlow;

use log::debug;

use super::display::DisplayTarget;
use super::frame::{FrameScheduler, RafScheduler};
use super::task::AnimationTask;
use crate::error::DomError;
use crate::pricing::format::{parse_display_value, ValueFormat};

/// Counts the number shown in one display target towards new values.
///
/// Each target owns exactly one animator, and an animator runs at most one
/// animation: starting a new one drops (and so cancels) the loop still in
/// flight, and the new animation starts from whatever the display shows at
/// that moment.
pub struct ValueAnimator<D, S: FrameScheduler = RafScheduler> {
    display: D,
    format: ValueFormat,
    scheduler: S,
    running: Option<S::Handle>,
}

impl<D> ValueAnimator<D, RafScheduler>
where
    D: DisplayTarget + Clone + 'static,
{
    pub fn new(display: D, format: ValueFormat) -> Self {
        Self::with_scheduler(display, format, RafScheduler)
    }
}

impl<D, S> ValueAnimator<D, S>
where
    D: DisplayTarget + Clone + 'static,
    S: FrameScheduler,
{
    pub fn with_scheduler(display: D, format: ValueFormat, scheduler: S) -> Self {
        Self { display, format, scheduler, running: None }
    }

    /// The value currently on screen, 0 if the text does not hold a number.
    pub fn displayed_value(&self) -> i64 {
        self.display
            .read_text()
            .map(|text| parse_display_value(&text))
            .unwrap_or(0)
    }

    pub fn animate_to(&mut self, end: i64, duration_ms: f64) -> Result<(), DomError> {
        self.running = None;

        let start = self.displayed_value();
        let task = AnimationTask::new(start as f64, end as f64, duration_ms, self.scheduler.now());
        debug!("Animating {} -> {} over {}ms", start, end, duration_ms);

        let display = self.display.clone();
        let format = self.format;
        let handle = self.scheduler.schedule(Box::new(move |now| {
            let frame = task.frame(now);
            display.write_text(&format.render(frame.value));
            if frame.done {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }))?;

        self.running = Some(handle);
        Ok(())
    }

    /// Writes `value` straight away, cancelling any running animation.
    pub fn set_now(&mut self, value: i64) {
        self.running = None;
        self.display.write_text(&self.format.render(value));
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::frame::FrameStep;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct TextCell(Rc<RefCell<String>>);

    impl TextCell {
        fn with(text: &str) -> Self {
            Self(Rc::new(RefCell::new(text.to_string())))
        }

        fn get(&self) -> String {
            self.0.borrow().clone()
        }
    }

    impl DisplayTarget for TextCell {
        fn read_text(&self) -> Option<String> {
            Some(self.get())
        }

        fn write_text(&self, text: &str) {
            *self.0.borrow_mut() = text.to_string();
        }
    }

    struct Entry {
        alive: Rc<Cell<bool>>,
        step: FrameStep,
    }

    /// Steps every live loop by hand with chosen timestamps.
    #[derive(Clone, Default)]
    struct ManualFrames {
        clock: Rc<Cell<f64>>,
        loops: Rc<RefCell<Vec<Entry>>>,
    }

    struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(false);
        }
    }

    impl ManualFrames {
        fn tick(&self, now: f64) {
            self.clock.set(now);
            let mut loops = self.loops.borrow_mut();
            loops.retain(|e| e.alive.get());
            for entry in loops.iter_mut() {
                if (entry.step)(now).is_break() {
                    entry.alive.set(false);
                }
            }
        }

        fn live(&self) -> usize {
            self.loops.borrow().iter().filter(|e| e.alive.get()).count()
        }
    }

    impl FrameScheduler for ManualFrames {
        type Handle = ManualHandle;

        fn now(&self) -> f64 {
            self.clock.get()
        }

        fn schedule(&self, step: FrameStep) -> Result<ManualHandle, DomError> {
            let alive = Rc::new(Cell::new(true));
            self.loops.borrow_mut().push(Entry { alive: alive.clone(), step });
            Ok(ManualHandle(alive))
        }
    }

    #[test]
    fn counts_from_displayed_value_to_target() {
        let frames = ManualFrames::default();
        let display = TextCell::with("0");
        let mut animator = ValueAnimator::with_scheduler(display.clone(), ValueFormat::Plain, frames.clone());

        animator.animate_to(100, 500.0).unwrap();
        frames.tick(250.0);
        assert_eq!(display.get(), "88");
        frames.tick(500.0);
        assert_eq!(display.get(), "100");
        assert_eq!(frames.live(), 0);
    }

    #[test]
    fn currency_display_starts_from_parsed_amount() {
        let frames = ManualFrames::default();
        let display = TextCell::with("$1,000");
        let mut animator = ValueAnimator::with_scheduler(display.clone(), ValueFormat::Currency, frames.clone());
        assert_eq!(animator.displayed_value(), 1000);

        animator.animate_to(2000, 100.0).unwrap();
        frames.tick(0.0);
        assert_eq!(display.get(), "$1,000");
        frames.tick(100.0);
        assert_eq!(display.get(), "$2,000");
    }

    #[test]
    fn garbage_text_starts_from_zero() {
        let frames = ManualFrames::default();
        let display = TextCell::with("--");
        let mut animator = ValueAnimator::with_scheduler(display.clone(), ValueFormat::Plain, frames.clone());

        animator.animate_to(10, 100.0).unwrap();
        frames.tick(0.0);
        assert_eq!(display.get(), "0");
    }

    #[test]
    fn new_target_supersedes_running_animation() {
        let frames = ManualFrames::default();
        let display = TextCell::with("0");
        let mut animator = ValueAnimator::with_scheduler(display.clone(), ValueFormat::Plain, frames.clone());

        animator.animate_to(100, 500.0).unwrap();
        frames.tick(250.0);
        assert_eq!(display.get(), "88");

        animator.animate_to(0, 500.0).unwrap();
        assert_eq!(frames.live(), 1);

        frames.tick(750.0);
        assert_eq!(display.get(), "0");
        frames.tick(2_000.0);
        assert_eq!(display.get(), "0");
    }

    #[test]
    fn set_now_cancels_and_writes() {
        let frames = ManualFrames::default();
        let display = TextCell::with("5");
        let mut animator = ValueAnimator::with_scheduler(display.clone(), ValueFormat::Currency, frames.clone());

        animator.animate_to(500, 500.0).unwrap();
        assert!(animator.is_running());
        animator.set_now(72);
        assert!(!animator.is_running());
        assert_eq!(frames.live(), 0);

        frames.tick(500.0);
        assert_eq!(display.get(), "$72");
    }
}
