//! Input contracts for the carousel controller.
//!
//! Adapters (wasm, headless hosts) queue host events as commands and pass
//! them to `Carousel::update()` together with the elapsed time.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Commands applied in order before the clock advances.
    #[serde(default)]
    pub commands: Vec<CarouselCommand>,
}

impl Inputs {
    pub fn one(command: CarouselCommand) -> Self {
        Self {
            commands: vec![command],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CarouselCommand {
    /// "next" button.
    Next,
    /// "previous" button.
    Prev,
    /// Programmatic jump; out-of-range indices are an error.
    JumpTo { index: usize },
    /// Pagination dot activation; the index is normalized.
    DotClicked { index: usize },
    /// Viewport resize notification.
    Resize,
    /// Load/ready notification.
    Ready,
}

/// Navigation direction for `Carousel::advance`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Next,
    Prev,
}
