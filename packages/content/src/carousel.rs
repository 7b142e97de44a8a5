//! # Testimonial carousel state
//!
//! A [`Carousel`] tracks the active slide among `len` items and two orthogonal
//! pieces of state:
//!
//! - the gesture [`Phase`]: `Idle → Dragging → (Sliding | Idle)`;
//! - the auto-advance timer, which is suspended exactly while dragging.
//!
//! Time is passed in as milliseconds from any monotonic-enough clock so the
//! logic can be driven by a browser timer, a tokio timer, or a test.
//!
//! | Event | Effect |
//! |-------|--------|
//! | [`Carousel::tick`] | Advances to the next slide once `auto_advance_ms` has elapsed since the last reset, unless dragging. |
//! | [`Carousel::go_to`], [`Carousel::next`], [`Carousel::previous`] | Manual navigation. Resets the timer. |
//! | [`Carousel::drag_start`] / [`Carousel::drag_move`] | Enter (from `Idle` only) / update `Dragging`. |
//! | [`Carousel::drag_end`] | Right past the threshold → previous, left past it → next, otherwise snap back. Resets the timer. |
//! | [`Carousel::settle`] | `Sliding → Idle` once the slide transition finished. |

pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 8_000;
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    Previous,
    Next,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Dragging { start_x: f64, current_x: f64 },
    Sliding(SlideDirection),
}

/// Result of releasing a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    Slid(SlideDirection),
    SnappedBack,
    /// Release without a preceding `drag_start`.
    NotDragging,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    len: usize,
    active: usize,
    phase: Phase,
    auto_advance_ms: u64,
    swipe_threshold_px: f64,
    timer_reset_at: u64,
}

impl Carousel {
    pub fn new(len: usize, now_ms: u64) -> Self {
        Self {
            len,
            active: 0,
            phase: Phase::Idle,
            auto_advance_ms: DEFAULT_AUTO_ADVANCE_MS,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            timer_reset_at: now_ms,
        }
    }

    pub fn with_auto_advance(mut self, ms: u64) -> Self {
        self.auto_advance_ms = ms.max(1);
        self
    }

    /// Non-finite values fall back to [`DEFAULT_SWIPE_THRESHOLD_PX`].
    pub fn with_swipe_threshold(mut self, px: f64) -> Self {
        self.swipe_threshold_px = if px.is_finite() {
            px.abs()
        } else {
            DEFAULT_SWIPE_THRESHOLD_PX
        };
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn is_sliding(&self) -> bool {
        matches!(self.phase, Phase::Sliding(_))
    }

    /// Horizontal offset to apply to the track while dragging.
    pub fn drag_offset(&self) -> f64 {
        match self.phase {
            Phase::Dragging { start_x, current_x } => current_x - start_x,
            _ => 0.0,
        }
    }

    /// Milliseconds until the next automatic advance is due.
    /// `None` while dragging or when there is nothing to rotate.
    pub fn ms_until_advance(&self, now_ms: u64) -> Option<u64> {
        if self.len < 2 || self.is_dragging() {
            return None;
        }
        let due = self.timer_reset_at.saturating_add(self.auto_advance_ms);
        Some(due.saturating_sub(now_ms))
    }

    /// Advance automatically if the timer is due. Returns whether it moved.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.ms_until_advance(now_ms) {
            Some(0) => {
                self.active = (self.active + 1) % self.len;
                self.timer_reset_at = now_ms;
                true
            }
            _ => false,
        }
    }

    pub fn go_to(&mut self, index: usize, now_ms: u64) {
        if self.len == 0 {
            return;
        }
        self.active = index % self.len;
        self.phase = Phase::Idle;
        self.timer_reset_at = now_ms;
    }

    pub fn next(&mut self, now_ms: u64) {
        if self.len == 0 {
            return;
        }
        self.go_to(self.active + 1, now_ms);
    }

    pub fn previous(&mut self, now_ms: u64) {
        if self.len == 0 {
            return;
        }
        self.go_to(self.active + self.len - 1, now_ms);
    }

    /// Only an idle carousel picks up a drag; a slide in flight has to settle first.
    pub fn drag_start(&mut self, x: f64) {
        if self.len == 0 || self.phase != Phase::Idle {
            return;
        }
        self.phase = Phase::Dragging {
            start_x: x,
            current_x: x,
        };
    }

    pub fn drag_move(&mut self, x: f64) {
        if let Phase::Dragging { current_x, .. } = &mut self.phase {
            *current_x = x;
        }
    }

    /// Finish a drag. The auto-advance timer restarts from `now_ms`.
    pub fn drag_end(&mut self, now_ms: u64) -> DragOutcome {
        let dx = match self.phase {
            Phase::Dragging { start_x, current_x } => current_x - start_x,
            _ => return DragOutcome::NotDragging,
        };
        self.timer_reset_at = now_ms;

        let direction = if dx > self.swipe_threshold_px {
            SlideDirection::Previous
        } else if dx < -self.swipe_threshold_px {
            SlideDirection::Next
        } else {
            self.phase = Phase::Idle;
            return DragOutcome::SnappedBack;
        };

        self.active = match direction {
            SlideDirection::Previous => (self.active + self.len - 1) % self.len,
            SlideDirection::Next => (self.active + 1) % self.len,
        };
        self.phase = Phase::Sliding(direction);
        DragOutcome::Slid(direction)
    }

    /// Leaving the drag area behaves like a release.
    pub fn drag_cancel(&mut self, now_ms: u64) -> DragOutcome {
        self.drag_end(now_ms)
    }

    pub fn settle(&mut self) {
        if let Phase::Sliding(_) = self.phase {
            self.phase = Phase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(c: &mut Carousel, from: f64, to: f64, now: u64) -> DragOutcome {
        c.drag_start(from);
        c.drag_move(to);
        c.drag_end(now)
    }

    #[test]
    fn test_auto_advance_every_interval() {
        let mut c = Carousel::new(3, 0);
        assert!(!c.tick(7_999));
        assert_eq!(c.active(), 0);
        assert!(c.tick(8_000));
        assert_eq!(c.active(), 1);
        assert!(!c.tick(15_999));
        assert!(c.tick(16_000));
        assert!(c.tick(24_000));
        assert_eq!(c.active(), 0);
    }

    #[test]
    fn test_drag_right_goes_previous_and_wraps() {
        let mut c = Carousel::new(4, 0);
        assert_eq!(
            drag(&mut c, 200.0, 350.0, 10),
            DragOutcome::Slid(SlideDirection::Previous)
        );
        assert_eq!(c.active(), 3);
        assert_eq!(c.phase(), Phase::Sliding(SlideDirection::Previous));
        c.settle();
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_drag_left_goes_next() {
        let mut c = Carousel::new(4, 0);
        assert_eq!(
            drag(&mut c, 300.0, 120.0, 10),
            DragOutcome::Slid(SlideDirection::Next)
        );
        assert_eq!(c.active(), 1);
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut c = Carousel::new(4, 0);
        c.go_to(2, 0);
        assert_eq!(drag(&mut c, 100.0, 200.0, 10), DragOutcome::SnappedBack);
        assert_eq!(drag(&mut c, 200.0, 100.0, 10), DragOutcome::SnappedBack);
        assert_eq!(drag(&mut c, 0.0, 40.0, 10), DragOutcome::SnappedBack);
        assert_eq!(c.active(), 2);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_timer_suspended_while_dragging() {
        let mut c = Carousel::new(3, 0);
        c.drag_start(50.0);
        assert_eq!(c.ms_until_advance(20_000), None);
        assert!(!c.tick(20_000));
        assert_eq!(c.active(), 0);
        assert_eq!(c.drag_end(20_000), DragOutcome::SnappedBack);
        assert!(!c.tick(27_999));
        assert!(c.tick(28_000));
    }

    #[test]
    fn test_manual_navigation_resets_timer() {
        let mut c = Carousel::new(5, 0);
        c.next(7_000);
        assert_eq!(c.active(), 1);
        assert_eq!(c.ms_until_advance(7_000), Some(8_000));
        assert!(!c.tick(14_999));
        assert!(c.tick(15_000));
        assert_eq!(c.active(), 2);

        c.go_to(4, 16_000);
        assert!(!c.tick(23_999));
        c.previous(23_500);
        assert_eq!(c.active(), 3);
        assert!(!c.tick(31_000));
        assert!(c.tick(31_500));
    }

    #[test]
    fn test_drag_offset() {
        let mut c = Carousel::new(2, 0);
        assert_eq!(c.drag_offset(), 0.0);
        c.drag_start(10.0);
        c.drag_move(-30.0);
        assert_eq!(c.drag_offset(), -40.0);
    }

    #[test]
    fn test_release_without_drag() {
        let mut c = Carousel::new(2, 0);
        assert_eq!(c.drag_end(5), DragOutcome::NotDragging);
        c.drag_move(400.0);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_empty_and_single() {
        let mut c = Carousel::new(0, 0);
        c.next(1);
        c.previous(1);
        c.drag_start(0.0);
        assert!(!c.is_dragging());
        assert!(!c.tick(100_000));

        let mut one = Carousel::new(1, 0);
        assert_eq!(one.ms_until_advance(0), None);
        assert_eq!(drag(&mut one, 0.0, 500.0, 1), DragOutcome::Slid(SlideDirection::Previous));
        assert_eq!(one.active(), 0);
    }

    #[test]
    fn test_drag_waits_for_slide_to_settle() {
        let mut c = Carousel::new(3, 0);
        assert_eq!(
            drag(&mut c, 300.0, 100.0, 0),
            DragOutcome::Slid(SlideDirection::Next)
        );
        assert!(c.is_sliding());
        c.drag_start(50.0);
        assert!(!c.is_dragging());
        assert_eq!(c.drag_end(10), DragOutcome::NotDragging);
        assert_eq!(c.active(), 1);

        c.settle();
        c.drag_start(50.0);
        assert!(c.is_dragging());
    }

    #[test]
    fn test_release_past_threshold_after_cancel() {
        // A browser-cancelled gesture releases at the last position it reported.
        let mut c = Carousel::new(3, 0);
        c.drag_start(400.0);
        c.drag_move(380.0);
        c.drag_move(160.0);
        assert_eq!(c.drag_cancel(5), DragOutcome::Slid(SlideDirection::Next));
        assert_eq!(c.active(), 1);
    }

    #[test]
    fn test_non_finite_threshold_uses_default() {
        for px in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut c = Carousel::new(3, 0).with_swipe_threshold(px);
            assert_eq!(
                drag(&mut c, 600.0, 100.0, 0),
                DragOutcome::Slid(SlideDirection::Next)
            );
            let mut short = Carousel::new(3, 0).with_swipe_threshold(px);
            assert_eq!(drag(&mut short, 0.0, 99.0, 0), DragOutcome::SnappedBack);
        }
    }

    #[test]
    fn test_custom_threshold() {
        let mut c = Carousel::new(3, 0).with_swipe_threshold(30.0);
        assert_eq!(
            drag(&mut c, 0.0, -31.0, 0),
            DragOutcome::Slid(SlideDirection::Next)
        );
    }
}
