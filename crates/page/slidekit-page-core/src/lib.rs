//! slidekit page core
//!
//! Small, host-driven state machines for the rest of a landing page: mobile
//! menu, scroll-linked chrome, scroll spy, eased scripted scrolling,
//! reveal-on-intersection, and a looping typewriter. Each one consumes scroll
//! offsets, visibility ratios or elapsed time and yields class decisions or
//! text frames.

pub mod chrome;
pub mod config;
pub mod error;
pub mod menu;
pub mod page;
pub mod reveal;
pub mod smooth_scroll;
pub mod spy;
pub mod typewriter;

pub use chrome::{ChromeState, ScrollChrome};
pub use config::{PageConfig, TypewriterConfig};
pub use error::{PageError, Result};
pub use menu::MenuState;
pub use page::{Page, PageFrame};
pub use reveal::RevealTracker;
pub use smooth_scroll::{ease_out_cubic, nav_target, SmoothScroll};
pub use spy::{ScrollSpy, Section};
pub use typewriter::{Typewriter, TypewriterFrame, TypewriterState};
