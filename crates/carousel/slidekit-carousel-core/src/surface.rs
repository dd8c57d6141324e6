//! Host-side rendering contract.
//!
//! The controller never touches a concrete renderer. A transform-based track
//! and a native scroll-snap track are both just [`RenderSurface`] impls.

use serde::{Deserialize, Serialize};

use crate::track::{DisplayState, Track};

/// One layout measurement of the track: slide width and inter-slide gap.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideExtent {
    pub width: f32,
    #[serde(default)]
    pub gap: f32,
}

impl SlideExtent {
    pub fn new(width: f32, gap: f32) -> Self {
        Self { width, gap }
    }

    /// A slide that has not been laid out yet reports no usable width.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.width.is_finite() && self.width > 0.0
    }

    /// Distance between the leading edges of neighbouring slides.
    /// An unparseable or negative gap counts as zero.
    #[inline]
    pub fn pitch(&self) -> f32 {
        let gap = if self.gap.is_finite() && self.gap > 0.0 {
            self.gap
        } else {
            0.0
        };
        self.width + gap
    }
}

/// Rendering surface the controller drives.
///
/// `measure` is called on every offset computation; implementations must not
/// cache it across layout changes.
pub trait RenderSurface {
    /// Current slide geometry.
    fn measure(&self) -> SlideExtent;

    /// Move the track so that `offset` pixels are scrolled past.
    fn set_offset(&mut self, offset: f32, animated: bool, duration_ms: u32);

    /// Apply an original slide's display state.
    fn set_slide_state(&mut self, original: usize, state: DisplayState);

    /// Mark pagination dot `dot` active or inactive.
    fn set_dot_active(&mut self, dot: usize, active: bool);

    /// Called once at construction with the full track, clones included.
    fn mount(&mut self, _track: &Track) {}
}

impl<S: RenderSurface + ?Sized> RenderSurface for Box<S> {
    fn measure(&self) -> SlideExtent {
        (**self).measure()
    }
    fn set_offset(&mut self, offset: f32, animated: bool, duration_ms: u32) {
        (**self).set_offset(offset, animated, duration_ms)
    }
    fn set_slide_state(&mut self, original: usize, state: DisplayState) {
        (**self).set_slide_state(original, state)
    }
    fn set_dot_active(&mut self, dot: usize, active: bool) {
        (**self).set_dot_active(dot, active)
    }
    fn mount(&mut self, track: &Track) {
        (**self).mount(track)
    }
}

/// One instruction received by a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SurfaceOp {
    Mount {
        track_len: usize,
    },
    SetOffset {
        offset: f32,
        animated: bool,
        duration_ms: u32,
    },
    SlideState {
        original: usize,
        state: DisplayState,
    },
    DotActive {
        dot: usize,
        active: bool,
    },
}

/// In-memory surface: fixed, host-settable geometry and an instruction log.
///
/// Useful for headless hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub extent: SlideExtent,
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(extent: SlideExtent) -> Self {
        Self {
            extent,
            ops: Vec::new(),
        }
    }

    /// Drain recorded instructions.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Offsets issued so far, with their animated flag.
    pub fn offsets(&self) -> impl Iterator<Item = (f32, bool)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::SetOffset {
                offset, animated, ..
            } => Some((*offset, *animated)),
            _ => None,
        })
    }

    pub fn last_offset(&self) -> Option<(f32, bool)> {
        self.offsets().last()
    }
}

impl RenderSurface for RecordingSurface {
    fn measure(&self) -> SlideExtent {
        self.extent
    }

    fn set_offset(&mut self, offset: f32, animated: bool, duration_ms: u32) {
        self.ops.push(SurfaceOp::SetOffset {
            offset,
            animated,
            duration_ms,
        });
    }

    fn set_slide_state(&mut self, original: usize, state: DisplayState) {
        self.ops.push(SurfaceOp::SlideState { original, state });
    }

    fn set_dot_active(&mut self, dot: usize, active: bool) {
        self.ops.push(SurfaceOp::DotActive { dot, active });
    }

    fn mount(&mut self, track: &Track) {
        self.ops.push(SurfaceOp::Mount {
            track_len: track.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_ignores_bad_gap() {
        assert_eq!(SlideExtent::new(300.0, 20.0).pitch(), 320.0);
        assert_eq!(SlideExtent::new(300.0, f32::NAN).pitch(), 300.0);
        assert_eq!(SlideExtent::new(300.0, -4.0).pitch(), 300.0);
    }

    #[test]
    fn zero_width_is_not_ready() {
        assert!(!SlideExtent::default().is_ready());
        assert!(!SlideExtent::new(f32::NAN, 0.0).is_ready());
        assert!(SlideExtent::new(1.0, 0.0).is_ready());
    }
}
