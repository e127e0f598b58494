use serde::{Deserialize, Serialize};

use super::LifecycleError;

pub const MAX_PROGRESS: u8 = 100;

/// Visible state of the splash overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplashPhase {
    Showing,
    FadingOut,
    Hidden,
}

/// Timing of the splash sequence, in milliseconds.
///
/// The progress bar gains `step` percent every `tick_ms` until it is capped
/// at 100. Once `total_ms` has elapsed the bar is forced full and the overlay
/// starts fading; `fade_ms` later it is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSplashTiming")]
pub struct SplashTiming {
    total_ms: u32,
    fade_ms: u32,
    tick_ms: u32,
    step: u8,
}

impl SplashTiming {
    pub fn new(total_ms: u32, fade_ms: u32, tick_ms: u32, step: u8) -> Result<Self, LifecycleError> {
        if tick_ms == 0 {
            return Err(LifecycleError::ZeroTick);
        }
        if step == 0 {
            return Err(LifecycleError::ZeroStep);
        }
        Ok(Self {
            total_ms,
            fade_ms,
            tick_ms,
            step,
        })
    }

    pub fn total_ms(&self) -> u32 {
        self.total_ms
    }

    pub fn fade_ms(&self) -> u32 {
        self.fade_ms
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    fn hidden_at(&self) -> u32 {
        self.total_ms.saturating_add(self.fade_ms)
    }
}

impl Default for SplashTiming {
    fn default() -> Self {
        Self {
            total_ms: 2500,
            fade_ms: 300,
            tick_ms: 40,
            step: 2,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawSplashTiming {
    total_ms: u32,
    fade_ms: u32,
    tick_ms: u32,
    step: u8,
}

impl Default for RawSplashTiming {
    fn default() -> Self {
        let SplashTiming {
            total_ms,
            fade_ms,
            tick_ms,
            step,
        } = SplashTiming::default();
        Self {
            total_ms,
            fade_ms,
            tick_ms,
            step,
        }
    }
}

impl TryFrom<RawSplashTiming> for SplashTiming {
    type Error = LifecycleError;

    fn try_from(raw: RawSplashTiming) -> Result<Self, Self::Error> {
        SplashTiming::new(raw.total_ms, raw.fade_ms, raw.tick_ms, raw.step)
    }
}

/// Outcome of a single [`SplashSequencer::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashStep {
    pub progress: u8,
    /// The phase entered by this advance, if it changed.
    pub transition: Option<SplashPhase>,
}

/// Timed state machine behind the loading screen.
///
/// The host feeds elapsed time through [`advance`](Self::advance); the
/// sequencer never schedules anything itself. `Hidden` is reported exactly
/// once, which is what the completion callback hangs off.
#[derive(Debug, Clone)]
pub struct SplashSequencer {
    timing: SplashTiming,
    elapsed_ms: u32,
    progress: u8,
    phase: SplashPhase,
    cancelled: bool,
}

impl SplashSequencer {
    pub fn new(timing: SplashTiming) -> Self {
        Self {
            timing,
            elapsed_ms: 0,
            progress: 0,
            phase: SplashPhase::Showing,
            cancelled: false,
        }
    }

    pub fn timing(&self) -> SplashTiming {
        self.timing
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Hidden
    }

    pub fn advance(&mut self, delta_ms: u32) -> SplashStep {
        if self.cancelled || self.is_complete() {
            return self.unchanged();
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);

        let ticks = self.elapsed_ms / self.timing.tick_ms;
        let ticked = ticks
            .saturating_mul(u32::from(self.timing.step))
            .min(u32::from(MAX_PROGRESS)) as u8;
        self.progress = self.progress.max(ticked);

        let before = self.phase;
        if self.elapsed_ms >= self.timing.total_ms {
            self.progress = MAX_PROGRESS;
            self.phase = SplashPhase::FadingOut;
        }
        if self.elapsed_ms >= self.timing.hidden_at() {
            self.phase = SplashPhase::Hidden;
        }

        SplashStep {
            progress: self.progress,
            transition: (self.phase != before).then_some(self.phase),
        }
    }

    /// Jump straight to `Hidden`, for hosts that cannot run timers.
    pub fn finish(&mut self) -> SplashStep {
        if self.cancelled || self.is_complete() {
            return self.unchanged();
        }
        self.elapsed_ms = self.elapsed_ms.max(self.timing.hidden_at());
        self.progress = MAX_PROGRESS;
        self.phase = SplashPhase::Hidden;
        SplashStep {
            progress: self.progress,
            transition: Some(SplashPhase::Hidden),
        }
    }

    /// Teardown. Nothing is reported after this, including completion.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    fn unchanged(&self) -> SplashStep {
        SplashStep {
            progress: self.progress,
            transition: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until(seq: &mut SplashSequencer, until_ms: u32) -> Vec<SplashPhase> {
        let tick = seq.timing().tick_ms();
        let mut transitions = Vec::new();
        while !seq.is_complete() && seq.elapsed_ms() + tick <= until_ms {
            if let Some(phase) = seq.advance(tick).transition {
                transitions.push(phase);
            }
        }
        let rest = until_ms.saturating_sub(seq.elapsed_ms());
        if rest > 0 && !seq.is_complete() {
            if let Some(phase) = seq.advance(rest).transition {
                transitions.push(phase);
            }
        }
        transitions
    }

    #[test]
    fn starts_showing_with_empty_bar() {
        let seq = SplashSequencer::new(SplashTiming::default());
        assert_eq!(seq.phase(), SplashPhase::Showing);
        assert_eq!(seq.progress(), 0);
        assert!(!seq.is_complete());
    }

    #[test]
    fn progress_steps_per_tick_and_caps() {
        let mut seq = SplashSequencer::new(SplashTiming::default());
        assert_eq!(seq.advance(40).progress, 2);
        assert_eq!(seq.advance(39).progress, 2);
        assert_eq!(seq.advance(1).progress, 4);

        run_until(&mut seq, 2400);
        assert_eq!(seq.progress(), 100);
        assert_eq!(seq.phase(), SplashPhase::Showing);
    }

    #[test]
    fn default_scenario_completes_once() {
        let timing = SplashTiming::new(2500, 300, 40, 2).unwrap();
        let mut seq = SplashSequencer::new(timing);
        let mut completions = 0;

        for phase in run_until(&mut seq, 2499) {
            if phase == SplashPhase::Hidden {
                completions += 1;
            }
        }
        assert_eq!(seq.phase(), SplashPhase::Showing);
        assert_eq!(completions, 0);

        let transitions = run_until(&mut seq, 2500 + 300 + 1);
        assert_eq!(transitions, vec![SplashPhase::FadingOut, SplashPhase::Hidden]);
        completions += transitions
            .iter()
            .filter(|p| **p == SplashPhase::Hidden)
            .count();
        assert_eq!(seq.phase(), SplashPhase::Hidden);
        assert_eq!(completions, 1);

        assert_eq!(seq.advance(10_000).transition, None);
    }

    #[test]
    fn throttled_host_still_completes_on_time() {
        let mut seq = SplashSequencer::new(SplashTiming::default());

        let first = seq.advance(1000);
        assert_eq!(first.progress, 50);
        assert_eq!(first.transition, None);

        assert_eq!(seq.advance(1000).transition, None);
        assert_eq!(seq.progress(), 100);

        assert_eq!(seq.advance(1000).transition, Some(SplashPhase::Hidden));
        assert_eq!(seq.elapsed_ms(), 3000);
    }

    #[test]
    fn progress_is_monotonic_and_full_before_hidden() {
        // Slow bar: only half full by the time the total elapses.
        let timing = SplashTiming::new(1000, 200, 40, 2).unwrap();
        let mut seq = SplashSequencer::new(timing);
        let mut last = 0;
        loop {
            let step = seq.advance(40);
            assert!(step.progress >= last);
            last = step.progress;
            if step.transition == Some(SplashPhase::FadingOut) {
                assert_eq!(step.progress, 100);
            }
            if step.transition == Some(SplashPhase::Hidden) {
                assert_eq!(step.progress, 100);
                break;
            }
        }
    }

    #[test]
    fn large_jump_goes_straight_to_hidden() {
        let mut seq = SplashSequencer::new(SplashTiming::default());
        let step = seq.advance(5000);
        assert_eq!(step.transition, Some(SplashPhase::Hidden));
        assert_eq!(step.progress, 100);
    }

    #[test]
    fn cancelled_sequencer_never_completes() {
        let mut seq = SplashSequencer::new(SplashTiming::default());
        seq.advance(1000);
        seq.cancel();
        assert_eq!(seq.advance(5000).transition, None);
        assert_eq!(seq.finish().transition, None);
        assert_eq!(seq.phase(), SplashPhase::Showing);
    }

    #[test]
    fn finish_reports_hidden_once() {
        let mut seq = SplashSequencer::new(SplashTiming::default());
        assert_eq!(seq.finish().transition, Some(SplashPhase::Hidden));
        assert_eq!(seq.finish().transition, None);
        assert_eq!(seq.progress(), 100);
    }

    #[test]
    fn rejects_degenerate_timing() {
        assert!(matches!(
            SplashTiming::new(2500, 300, 0, 2),
            Err(LifecycleError::ZeroTick)
        ));
        assert!(matches!(
            SplashTiming::new(2500, 300, 40, 0),
            Err(LifecycleError::ZeroStep)
        ));
    }

    #[test]
    fn timing_deserializes_with_defaults() {
        let timing: SplashTiming = serde_json::from_str(r#"{"total_ms": 2000}"#).unwrap();
        assert_eq!(timing.total_ms(), 2000);
        assert_eq!(timing.fade_ms(), 300);
        assert_eq!(timing.tick_ms(), 40);

        assert!(serde_json::from_str::<SplashTiming>(r#"{"tick_ms": 0}"#).is_err());
    }
}
