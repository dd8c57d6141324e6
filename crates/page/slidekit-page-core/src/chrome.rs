//! Scroll-driven chrome flags: navbar shadow, scroll-to-top, home highlight.

use serde::{Deserialize, Serialize};

use crate::config::PageConfig;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeState {
    /// `scrolled` class on the navbar and the mobile menu.
    pub navbar_scrolled: bool,
    /// `visible` class on the scroll-to-top button.
    pub scroll_top_visible: bool,
    /// `home-active` class on the body.
    pub home_active: bool,
}

#[derive(Clone, Debug)]
pub struct ScrollChrome {
    navbar_after: f32,
    scroll_top_after: f32,
    home_min_bottom: f32,
}

impl ScrollChrome {
    pub fn new(cfg: &PageConfig) -> Self {
        Self {
            navbar_after: cfg.navbar_scrolled_after,
            scroll_top_after: cfg.scroll_top_after,
            home_min_bottom: cfg.home_active_min_bottom,
        }
    }

    /// `home_bottom` is the home section's bottom edge in viewport
    /// coordinates, or `None` when the page has no home section.
    pub fn evaluate(&self, scroll_y: f32, home_bottom: Option<f32>) -> ChromeState {
        ChromeState {
            navbar_scrolled: scroll_y > self.navbar_after,
            scroll_top_visible: scroll_y > self.scroll_top_after,
            home_active: home_bottom.is_some_and(|bottom| bottom > self.home_min_bottom),
        }
    }
}

impl Default for ScrollChrome {
    fn default() -> Self {
        Self::new(&PageConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strict() {
        let chrome = ScrollChrome::default();
        assert_eq!(chrome.evaluate(50.0, Some(80.0)), ChromeState::default());

        let s = chrome.evaluate(51.0, Some(81.0));
        assert!(s.navbar_scrolled && !s.scroll_top_visible && s.home_active);

        let s = chrome.evaluate(301.0, None);
        assert!(s.navbar_scrolled && s.scroll_top_visible && !s.home_active);
    }
}
