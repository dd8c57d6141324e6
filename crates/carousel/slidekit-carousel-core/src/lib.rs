//! slidekit carousel core (renderer-agnostic)
//!
//! A looping carousel controller. Boundary clones at both ends of the track
//! fake an infinite loop; after each animated move settles, the controller
//! silently snaps from a clone back onto the matching original. Geometry and
//! drawing are delegated to a host [`RenderSurface`].
//!
//! Time is driven by the host through [`Carousel::update`], so the controller
//! has no timers of its own and runs the same in a browser, a test, or a
//! headless renderer.

pub mod config;
pub mod controller;
pub mod error;
pub mod inputs;
pub mod outputs;
pub mod render;
pub mod surface;
pub mod timer;
pub mod track;

// Re-exports for consumers (adapters)
pub use config::CarouselConfig;
pub use controller::{offset_for_extent, Carousel, MoveOutcome, Phase};
pub use error::{CarouselError, Result};
pub use inputs::{CarouselCommand, Direction, Inputs};
pub use outputs::{CarouselEvent, Outputs};
pub use surface::{RecordingSurface, RenderSurface, SlideExtent, SurfaceOp};
pub use track::{DisplayState, Dot, Slide, Track};
