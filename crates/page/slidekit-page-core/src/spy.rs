//! Scroll spy: which section the nav should highlight.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    /// Document offset of the section's top edge.
    pub top: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ScrollSpy {
    sections: Vec<Section>,
    fallback_offset: f32,
    current: Option<String>,
}

impl ScrollSpy {
    pub fn new(sections: Vec<Section>, fallback_offset: f32) -> Self {
        Self {
            sections,
            fallback_offset,
            current: None,
        }
    }

    /// Replace section geometry after a layout change.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Recompute the highlighted section: the last one in document order whose
    /// top, less the navbar height, has been scrolled past.
    ///
    /// While `suspended` (a scripted scroll is running) the previous answer is
    /// kept so links do not flicker.
    pub fn update(&mut self, scroll_y: f32, nav_height: Option<f32>, suspended: bool) -> Option<&str> {
        if !suspended {
            let offset = nav_height.unwrap_or(self.fallback_offset);
            self.current = self
                .sections
                .iter()
                .filter(|s| scroll_y >= s.top - offset)
                .last()
                .map(|s| s.id.clone());
        }
        self.current.as_deref()
    }

    /// Whether a nav link with this `href` should carry the `active` class.
    pub fn is_link_active(&self, href: &str) -> bool {
        match (&self.current, href.strip_prefix('#')) {
            (Some(current), Some(id)) => current == id,
            _ => false,
        }
    }
}
