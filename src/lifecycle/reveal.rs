use serde::{Deserialize, Serialize};

use super::LifecycleError;

/// How a block qualifies as "in view".
///
/// A block counts once `threshold` of it intersects the viewport, with the
/// viewport's bottom edge pulled up by `bottom_margin_px` so the trigger trips
/// a little before the block actually reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRevealOptions")]
pub struct RevealOptions {
    threshold: f64,
    bottom_margin_px: u32,
}

impl RevealOptions {
    pub fn new(threshold: f64, bottom_margin_px: u32) -> Result<Self, LifecycleError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(LifecycleError::ThresholdOutOfRange(threshold));
        }
        Ok(Self {
            threshold,
            bottom_margin_px,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn bottom_margin_px(&self) -> u32 {
        self.bottom_margin_px
    }

    /// Root margin in the CSS shorthand the intersection API expects.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }

    /// The browser applies `threshold` itself when notifying. The reported
    /// ratio can sit just under it after rect rounding, so it is not rechecked.
    pub fn qualifies(&self, sample: IntersectionSample) -> bool {
        sample.is_intersecting
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 50,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawRevealOptions {
    threshold: f64,
    bottom_margin_px: u32,
}

impl Default for RawRevealOptions {
    fn default() -> Self {
        let defaults = RevealOptions::default();
        Self {
            threshold: defaults.threshold,
            bottom_margin_px: defaults.bottom_margin_px,
        }
    }
}

impl TryFrom<RawRevealOptions> for RevealOptions {
    type Error = LifecycleError;

    fn try_from(raw: RawRevealOptions) -> Result<Self, Self::Error> {
        RevealOptions::new(raw.threshold, raw.bottom_margin_px)
    }
}

/// One intersection notification for a watched block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Show the block and stop watching it.
    Reveal,
    Ignore,
}

/// Reveal state of a single content block.
#[derive(Debug, Clone)]
pub struct RevealEntry {
    visible: bool,
    watching: bool,
    delay_ms: u32,
}

impl RevealEntry {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            visible: false,
            watching: true,
            delay_ms,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_watching(&self) -> bool {
        self.watching
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Value for the block's `transition-delay`. Only offsets the animation;
    /// detection is unaffected.
    pub fn transition_delay(&self) -> String {
        format!("{}ms", self.delay_ms)
    }

    pub fn observe(&mut self, sample: IntersectionSample, options: &RevealOptions) -> RevealAction {
        if !self.watching || !options.qualifies(sample) {
            return RevealAction::Ignore;
        }
        self.visible = true;
        self.watching = false;
        RevealAction::Reveal
    }

    /// Reveal without a sample, when the host cannot watch intersections.
    pub fn force_reveal(&mut self) -> RevealAction {
        if !self.watching {
            return RevealAction::Ignore;
        }
        self.visible = true;
        self.watching = false;
        RevealAction::Reveal
    }

    /// Stop watching. Returns whether a live watch had to be released.
    pub fn teardown(&mut self) -> bool {
        std::mem::replace(&mut self.watching, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ratio: f64) -> IntersectionSample {
        IntersectionSample {
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    #[test]
    fn starts_hidden_and_watching() {
        let entry = RevealEntry::new(0);
        assert!(!entry.is_visible());
        assert!(entry.is_watching());
    }

    #[test]
    fn staggered_block_reveals_once() {
        let options = RevealOptions::default();
        let mut entry = RevealEntry::new(400);

        assert_eq!(entry.observe(sample(0.1), &options), RevealAction::Reveal);
        assert!(entry.is_visible());
        assert!(!entry.is_watching());

        assert_eq!(entry.observe(sample(0.8), &options), RevealAction::Ignore);
        assert!(entry.is_visible());
        assert_eq!(entry.transition_delay(), "400ms");
    }

    #[test]
    fn crossing_reported_under_threshold_still_reveals() {
        let options = RevealOptions::default();
        let mut entry = RevealEntry::new(0);
        let rounded = IntersectionSample {
            is_intersecting: true,
            ratio: 0.0999,
        };
        assert_eq!(entry.observe(rounded, &options), RevealAction::Reveal);
        assert!(entry.is_visible());
    }

    #[test]
    fn leaving_the_viewport_is_ignored() {
        let options = RevealOptions::default();
        let mut entry = RevealEntry::new(0);
        assert_eq!(entry.observe(sample(0.0), &options), RevealAction::Ignore);
        assert_eq!(
            entry.observe(
                IntersectionSample {
                    is_intersecting: false,
                    ratio: 0.5
                },
                &options
            ),
            RevealAction::Ignore
        );
        assert!(!entry.is_visible());
    }

    #[test]
    fn scrolling_away_never_hides_again() {
        let options = RevealOptions::default();
        let mut entry = RevealEntry::new(0);
        entry.observe(sample(0.3), &options);
        entry.observe(sample(0.0), &options);
        assert!(entry.is_visible());
    }

    #[test]
    fn teardown_before_reveal_freezes_state() {
        let options = RevealOptions::default();
        let mut entry = RevealEntry::new(0);
        assert!(entry.teardown());
        assert!(!entry.teardown());

        assert_eq!(entry.observe(sample(1.0), &options), RevealAction::Ignore);
        assert_eq!(entry.force_reveal(), RevealAction::Ignore);
        assert!(!entry.is_visible());
    }

    #[test]
    fn teardown_after_reveal_has_nothing_to_release() {
        let options = RevealOptions::default();
        let mut entry = RevealEntry::new(0);
        entry.observe(sample(1.0), &options);
        assert!(!entry.teardown());
        assert!(entry.is_visible());
    }

    #[test]
    fn root_margin_pulls_bottom_edge_up() {
        assert_eq!(RevealOptions::default().root_margin(), "0px 0px -50px 0px");
        let options = RevealOptions::new(0.25, 120).unwrap();
        assert_eq!(options.root_margin(), "0px 0px -120px 0px");
    }

    #[test]
    fn threshold_must_be_a_fraction() {
        assert!(matches!(
            RevealOptions::new(1.5, 50),
            Err(LifecycleError::ThresholdOutOfRange(_))
        ));
        assert!(RevealOptions::new(f64::NAN, 50).is_err());
        assert!(serde_json::from_str::<RevealOptions>(r#"{"threshold": -0.1}"#).is_err());

        let parsed: RevealOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, RevealOptions::default());
    }
}
