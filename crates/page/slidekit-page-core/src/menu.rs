//! Mobile menu open/close state. The menu and its toggle button share it.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A nav link was followed. Returns `true` if that closed the menu.
    pub fn on_link_activated(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}
