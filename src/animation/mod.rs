pub mod animator;
pub mod display;
pub mod frame;
pub mod task;

pub use animator::ValueAnimator;
pub use display::DisplayTarget;
pub use frame::{FrameLoop, FrameScheduler, RafScheduler};
pub use task::{ease_out_cubic, AnimationFrame, AnimationTask};
