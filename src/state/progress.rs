//! Progress gauge animation state

use std::time::{Duration, Instant};

/// Eases the progress gauge between step ratios.
///
/// On every step change the gauge animates from its currently displayed
/// ratio to the new `current / max` target with a cubic ease-out. While an
/// animation is in flight the event loop polls at the fast rate.
#[derive(Debug)]
pub struct ProgressState {
    started: Instant,
    from: f32,
    to: f32,
}

impl ProgressState {
    /// Duration of the ratio transition
    const ANIMATION_DURATION: Duration = Duration::from_millis(400);

    /// Start settled at the given ratio
    pub fn new(ratio: f32) -> Self {
        Self {
            started: Instant::now(),
            from: ratio,
            to: ratio,
        }
    }

    /// Animate towards a new target ratio from the currently displayed
    /// value. Retargeting to the current target is a no-op.
    pub fn retarget(&mut self, ratio: f32) {
        if ratio == self.to {
            return;
        }
        self.from = self.current();
        self.to = ratio;
        self.started = Instant::now();
    }

    /// The ratio to display right now
    pub fn current(&self) -> f32 {
        if self.from == self.to {
            return self.to;
        }
        let elapsed = self.started.elapsed();
        if elapsed >= Self::ANIMATION_DURATION {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
        let eased = simple_easing::cubic_out(t);
        self.from + (self.to - self.from) * eased
    }

    /// The ratio the animation is heading towards
    #[allow(dead_code)]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// True once the displayed ratio has reached the target
    pub fn is_settled(&self) -> bool {
        self.from == self.to || self.started.elapsed() >= Self::ANIMATION_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_settled_at_ratio() {
        let progress = ProgressState::new(0.5);
        assert!(progress.is_settled());
        assert_eq!(progress.current(), 0.5);
        assert_eq!(progress.target(), 0.5);
    }

    #[test]
    fn test_retarget_to_same_ratio_stays_settled() {
        let mut progress = ProgressState::new(0.25);
        progress.retarget(0.25);
        assert!(progress.is_settled());
    }

    #[test]
    fn test_retarget_starts_animation_towards_target() {
        let mut progress = ProgressState::new(0.25);
        progress.retarget(0.5);
        assert_eq!(progress.target(), 0.5);
        assert!(!progress.is_settled());
        // Just after retargeting the displayed value is still near the start
        let shown = progress.current();
        assert!((0.25..=0.5).contains(&shown));
    }

    #[test]
    fn test_current_stays_within_bounds_when_shrinking() {
        let mut progress = ProgressState::new(1.0);
        progress.retarget(0.5);
        let shown = progress.current();
        assert!((0.5..=1.0).contains(&shown));
    }

    // Note: the time-based settling transition is not asserted here since it
    // would need a mockable clock; the settled and just-retargeted ends are
    // covered above and the animation itself is verified manually.
}
