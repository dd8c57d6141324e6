//! Output contracts from the carousel controller.
//!
//! Visual instructions go straight to the `RenderSurface`. `Outputs` carries
//! the semantic events hosts may want to forward (indicators, analytics).

use serde::{Deserialize, Serialize};

/// Discrete signals emitted while the controller runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum CarouselEvent {
    /// An animated move was committed.
    TransitionStarted { from: usize, to: usize, offset: f32 },
    /// An instant re-render (init, teleport, ready) was issued.
    Rendered { index: usize, offset: f32 },
    /// The active original slide changed.
    ActiveChanged { original: usize },
    /// The settle timer fired; navigation is accepted again.
    Settled { index: usize },
    /// A silent loop-boundary correction.
    Teleported { from: usize, to: usize },
    /// A navigation request arrived while a transition was in flight.
    NavigationRejected,
    /// Geometry was not measurable; offset 0 was used and a later resize or
    /// ready notification will correct it.
    LayoutDeferred,
    Error { message: String },
}

/// Events accumulated since the previous `Carousel::update()` returned.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<CarouselEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: CarouselEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
