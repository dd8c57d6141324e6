//! Scripted window scroll with a fast start and slow end.
//!
//! While a scroll is in flight, native wheel/touch input should be suppressed
//! by the host and the scroll spy held.

use log::debug;

/// Ease-out cubic on `t` in `[0, 1]`.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = t - 1.0;
    u * u * u + 1.0
}

/// Window position that brings a section's top just below the navbar.
#[inline]
pub fn nav_target(section_top: f32, nav_offset: f32) -> f32 {
    section_top - nav_offset
}

/// Window position that centers an element vertically in the viewport,
/// clamped at the top of the document.
#[inline]
pub fn center_target(element_top: f32, element_height: f32, viewport_height: f32) -> f32 {
    (element_top + element_height / 2.0 - viewport_height / 2.0).max(0.0)
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Flight {
    start: f32,
    target: f32,
    duration_ms: u32,
    elapsed_ms: u32,
}

#[derive(Clone, Debug, Default)]
pub struct SmoothScroll {
    flight: Option<Flight>,
}

impl SmoothScroll {
    /// Begin scrolling from `start` to `target`. Refused (returns `false`)
    /// while another scroll is in flight.
    pub fn start(&mut self, start: f32, target: f32, duration_ms: u32) -> bool {
        if self.flight.is_some() {
            return false;
        }
        debug!("smooth scroll: {start} -> {target} over {duration_ms}ms");
        self.flight = Some(Flight {
            start,
            target,
            duration_ms,
            elapsed_ms: 0,
        });
        true
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.flight.is_some()
    }

    /// Native scroll input must be blocked while this is true.
    #[inline]
    pub fn locks_native_input(&self) -> bool {
        self.is_active()
    }

    /// Advance by `dt_ms` and return the position to scroll to, if any.
    ///
    /// The final frame lands exactly on the target and releases the lock.
    pub fn advance(&mut self, dt_ms: u32) -> Option<f32> {
        let flight = self.flight.as_mut()?;
        flight.elapsed_ms = flight.elapsed_ms.saturating_add(dt_ms);
        if flight.elapsed_ms >= flight.duration_ms {
            let target = flight.target;
            self.flight = None;
            debug!("smooth scroll: arrived at {target}");
            return Some(target);
        }
        let t = flight.elapsed_ms as f32 / flight.duration_ms as f32;
        Some(flight.start + (flight.target - flight.start) * ease_out_cubic(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Fast start: more than half the distance by the midpoint.
        assert!(ease_out_cubic(0.5) > 0.8);
    }

    #[test]
    fn lands_on_target_and_refuses_overlap() {
        let mut s = SmoothScroll::default();
        assert!(s.start(1000.0, 0.0, 500));
        assert!(!s.start(0.0, 200.0, 500));
        assert!(s.locks_native_input());

        let mid = s.advance(250).unwrap();
        assert!(mid < 500.0 && mid > 0.0);
        assert_eq!(s.advance(300), Some(0.0));
        assert!(!s.is_active());
        assert_eq!(s.advance(16), None);
    }

    #[test]
    fn center_target_clamps_at_top() {
        assert_eq!(center_target(1200.0, 200.0, 800.0), 900.0);
        assert_eq!(center_target(100.0, 50.0, 800.0), 0.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let mut s = SmoothScroll::default();
        s.start(10.0, 90.0, 0);
        assert_eq!(s.advance(0), Some(90.0));
    }
}
