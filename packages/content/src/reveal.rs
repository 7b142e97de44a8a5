//! One-shot visibility latch for scroll-triggered reveal animations.

/// Flips to revealed on the first intersection and stays there.
///
/// The UI attaches an observer while [`RevealLatch::is_armed`] is true and
/// disconnects it as soon as [`RevealLatch::observe`] reports the flip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    revealed: bool,
    threshold: f64,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            revealed: false,
            threshold: if threshold.is_finite() {
                threshold.clamp(0.0, 1.0)
            } else {
                0.0
            },
        }
    }

    /// Fraction of the element that must be visible, for the observer init.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_armed(&self) -> bool {
        !self.revealed
    }

    /// Feed one intersection entry. Returns `true` only on the call that
    /// flipped the latch.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(0.15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flips_once() {
        let mut latch = RevealLatch::default();
        assert!(latch.is_armed());
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
        assert!(latch.observe(true));
        assert!(latch.is_revealed());
        assert!(!latch.is_armed());
        assert!(!latch.observe(true));
    }

    #[test]
    fn test_never_unreveals() {
        let mut latch = RevealLatch::new(0.2);
        latch.observe(true);
        latch.observe(false);
        latch.observe(false);
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(RevealLatch::new(1.5).threshold(), 1.0);
        assert_eq!(RevealLatch::new(-0.3).threshold(), 0.0);
        assert_eq!(RevealLatch::new(f64::NAN).threshold(), 0.0);
        assert_eq!(RevealLatch::new(0.1).threshold(), 0.1);
    }
}
