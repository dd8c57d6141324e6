//! Page configuration: scroll thresholds and typewriter timing.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Navbar gets its shadow once the page scrolls past this.
    pub navbar_scrolled_after: f32,
    /// Scroll-to-top button shows once the page scrolls past this.
    pub scroll_top_after: f32,
    /// Home stays "active" while its bottom edge is below this viewport offset.
    pub home_active_min_bottom: f32,
    /// Navbar height assumed when none can be measured.
    pub fallback_nav_offset: f32,
    /// Duration of nav-link and scroll-to-top smooth scrolls.
    pub scroll_duration_ms: u32,
    /// Visible fraction at which content is revealed.
    pub reveal_threshold: f32,
    pub typewriter: TypewriterConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            navbar_scrolled_after: 50.0,
            scroll_top_after: 300.0,
            home_active_min_bottom: 80.0,
            fallback_nav_offset: 80.0,
            scroll_duration_ms: 500,
            reveal_threshold: 0.05,
            typewriter: TypewriterConfig::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub type_ms: u32,
    pub delete_ms: u32,
    /// Pause with the full phrase shown.
    pub hold_ms: u32,
    /// Pause with the line empty before the next phrase.
    pub rest_ms: u32,
    /// Visible fraction of the host section that starts the loop.
    pub trigger_threshold: f32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 1500,
            rest_ms: 500,
            trigger_threshold: 0.2,
        }
    }
}
