//! View lifecycle: the splash sequence that gates the page and the one-shot
//! reveal state of each content block.
//!
//! Both are plain state machines driven by the host's timers and
//! intersection notifications, so they can be exercised without a browser.

mod reveal;
mod splash;

pub use reveal::{IntersectionSample, RevealAction, RevealEntry, RevealOptions};
pub use splash::{SplashPhase, SplashSequencer, SplashStep, SplashTiming, MAX_PROGRESS};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LifecycleError {
    #[error("splash tick interval must be non-zero")]
    ZeroTick,
    #[error("splash progress step must be non-zero")]
    ZeroStep,
    #[error("reveal threshold {0} is outside 0.0..=1.0")]
    ThresholdOutOfRange(f64),
}
