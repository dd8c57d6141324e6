//! Page controller: wires menu, chrome, scroll spy and smooth scroll together
//! the way a single-page site uses them.

use serde::{Deserialize, Serialize};

use crate::chrome::{ChromeState, ScrollChrome};
use crate::config::PageConfig;
use crate::menu::MenuState;
use crate::reveal::RevealTracker;
use crate::smooth_scroll::{center_target, nav_target, SmoothScroll};
use crate::spy::{ScrollSpy, Section};

/// Everything a scroll tick decides.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageFrame {
    pub chrome: ChromeState,
    pub active_section: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Page {
    cfg: PageConfig,
    menu: MenuState,
    chrome: ScrollChrome,
    spy: ScrollSpy,
    scroll: SmoothScroll,
}

impl Page {
    pub fn new(cfg: PageConfig, sections: Vec<Section>) -> Self {
        Self {
            chrome: ScrollChrome::new(&cfg),
            spy: ScrollSpy::new(sections, cfg.fallback_nav_offset),
            menu: MenuState::default(),
            scroll: SmoothScroll::default(),
            cfg,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.cfg
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn spy_mut(&mut self) -> &mut ScrollSpy {
        &mut self.spy
    }

    /// Reveal tracker for one content element at the configured threshold.
    pub fn reveal_tracker(&self, once: bool) -> RevealTracker {
        RevealTracker::new(self.cfg.reveal_threshold, once)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    /// Scroll notification (already throttled to one per frame by the host).
    pub fn on_scroll(
        &mut self,
        scroll_y: f32,
        nav_height: Option<f32>,
        home_bottom: Option<f32>,
    ) -> PageFrame {
        let suspended = self.scroll.locks_native_input();
        let active_section = self
            .spy
            .update(scroll_y, nav_height, suspended)
            .map(str::to_owned);
        PageFrame {
            chrome: self.chrome.evaluate(scroll_y, home_bottom),
            active_section,
        }
    }

    /// Nav link followed: close the menu and, for an in-page `#id` target,
    /// start a smooth scroll to it. Returns `true` if a scroll started.
    pub fn follow_link(&mut self, href: &str, scroll_y: f32, nav_height: Option<f32>) -> bool {
        self.menu.on_link_activated();
        let Some(id) = href.strip_prefix('#') else {
            return false;
        };
        let Some(top) = self.spy.sections().iter().find(|s| s.id == id).map(|s| s.top) else {
            return false;
        };
        let offset = nav_height.unwrap_or(self.cfg.fallback_nav_offset);
        self.scroll
            .start(scroll_y, nav_target(top, offset), self.cfg.scroll_duration_ms)
    }

    /// Detail link: smooth-scroll so the target element sits in the middle of
    /// the viewport. Leaves the menu as it is.
    pub fn scroll_into_center(
        &mut self,
        scroll_y: f32,
        element_top: f32,
        element_height: f32,
        viewport_height: f32,
    ) -> bool {
        let target = center_target(element_top, element_height, viewport_height);
        self.scroll.start(scroll_y, target, self.cfg.scroll_duration_ms)
    }

    /// Scroll-to-top button.
    pub fn scroll_to_top(&mut self, scroll_y: f32) -> bool {
        self.scroll.start(scroll_y, 0.0, self.cfg.scroll_duration_ms)
    }

    /// Advance the scripted scroll; returns the window position to apply.
    pub fn tick(&mut self, dt_ms: u32) -> Option<f32> {
        self.scroll.advance(dt_ms)
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_active()
    }
}

