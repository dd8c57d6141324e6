//! Reveal-on-intersection. Revealed elements keep their `show` class.

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RevealTracker {
    threshold: f32,
    once: bool,
    shown: bool,
    observing: bool,
}

impl RevealTracker {
    pub fn new(threshold: f32, once: bool) -> Self {
        Self {
            threshold,
            once,
            shown: false,
            observing: true,
        }
    }

    /// Feed an intersection ratio. Returns `true` when this call revealed the
    /// element.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if !self.observing || ratio <= 0.0 || ratio < self.threshold {
            return false;
        }
        if self.once {
            self.observing = false;
        }
        !std::mem::replace(&mut self.shown, true)
    }

    #[inline]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    #[inline]
    pub fn is_observing(&self) -> bool {
        self.observing
    }
}
