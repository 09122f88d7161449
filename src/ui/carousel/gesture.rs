//! Drag/swipe handling for carousels.
//!
//! A release commits a page change when its swipe power
//! (`|offset| × velocity`) exceeds the threshold. Negative power (a
//! leftward flick) pages forward, positive power pages backward.

use std::time::Instant;

use crate::ui::direction::Direction;

pub fn swipe_power(offset_x: f32, velocity_x: f32) -> f32 {
    offset_x.abs() * velocity_x
}

/// Page direction a drag release commits to, `None` to snap back.
pub fn resolve_swipe(offset_x: f32, velocity_x: f32, threshold: f32) -> Option<Direction> {
    let power = swipe_power(offset_x, velocity_x);
    if power < -threshold {
        Some(Direction::Forward)
    } else if power > threshold {
        Some(Direction::Backward)
    } else {
        None
    }
}

/// Offset and velocity of a finished drag, in px and px/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    pub offset_x: f32,
    pub velocity_x: f32,
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    x: f32,
    at: Instant,
}

/// Turns pointer press/move/release samples into a [`DragRelease`].
///
/// Velocity is taken from the most recent movement with a non-zero
/// time delta, so a drag that stops before release loses its momentum.
#[derive(Debug, Default)]
pub struct DragTracker {
    origin: Option<Sample>,
    last: Option<Sample>,
    velocity_x: f32,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    pub fn press(&mut self, x: f32, at: Instant) {
        let sample = Sample { x, at };
        self.origin = Some(sample);
        self.last = Some(sample);
        self.velocity_x = 0.0;
    }

    pub fn drag(&mut self, x: f32, at: Instant) {
        let Some(last) = self.last else {
            return;
        };
        let dt = at.saturating_duration_since(last.at).as_secs_f32();
        if dt > 0.0 {
            self.velocity_x = (x - last.x) / dt;
        } else if x == last.x {
            self.velocity_x = 0.0;
        }
        self.last = Some(Sample { x, at });
    }

    /// Finish the drag. `None` if no press was recorded.
    pub fn release(&mut self, x: f32, at: Instant) -> Option<DragRelease> {
        self.drag(x, at);
        let origin = self.origin.take()?;
        self.last = None;
        let velocity_x = std::mem::take(&mut self.velocity_x);
        Some(DragRelease {
            offset_x: x - origin.x,
            velocity_x,
        })
    }

    pub fn cancel(&mut self) {
        self.origin = None;
        self.last = None;
        self.velocity_x = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn power_keeps_velocity_sign() {
        assert_eq!(swipe_power(-5.0, -3000.0), -15_000.0);
        assert_eq!(swipe_power(-5.0, 3000.0), 15_000.0);
        assert_eq!(swipe_power(5.0, 500.0), 2_500.0);
    }

    #[test]
    fn leftward_flick_pages_forward() {
        assert_eq!(resolve_swipe(-5.0, -3000.0, 10_000.0), Some(Direction::Forward));
    }

    #[test]
    fn rightward_flick_pages_backward() {
        assert_eq!(resolve_swipe(5.0, 3000.0, 10_000.0), Some(Direction::Backward));
    }

    #[test]
    fn weak_gesture_snaps_back() {
        assert_eq!(resolve_swipe(5.0, 500.0, 10_000.0), None);
        assert_eq!(resolve_swipe(100.0, 100.0, 10_000.0), None);
    }

    #[test]
    fn exactly_threshold_does_not_page() {
        assert_eq!(resolve_swipe(10.0, 1000.0, 10_000.0), None);
        assert_eq!(resolve_swipe(10.0, -1000.0, 10_000.0), None);
    }

    #[test]
    fn tracker_measures_offset_and_velocity() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::new();
        tracker.press(400.0, t0);
        tracker.drag(380.0, t0 + Duration::from_millis(10));
        let release = tracker
            .release(360.0, t0 + Duration::from_millis(20))
            .expect("release");

        assert_eq!(release.offset_x, -40.0);
        assert!((release.velocity_x + 2000.0).abs() < 1.0);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn release_without_press_yields_nothing() {
        let mut tracker = DragTracker::new();
        assert!(tracker.release(10.0, Instant::now()).is_none());
    }

    #[test]
    fn pause_before_release_drops_momentum() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::new();
        tracker.press(0.0, t0);
        tracker.drag(80.0, t0 + Duration::from_millis(10));
        tracker.drag(80.0, t0 + Duration::from_millis(500));
        let release = tracker
            .release(80.0, t0 + Duration::from_millis(510))
            .expect("release");
        assert_eq!(release.offset_x, 80.0);
        assert_eq!(release.velocity_x, 0.0);
    }

    #[test]
    fn cancel_forgets_press() {
        let mut tracker = DragTracker::new();
        tracker.press(0.0, Instant::now());
        tracker.cancel();
        assert!(!tracker.is_dragging());
        assert!(tracker.release(5.0, Instant::now()).is_none());
    }
}
