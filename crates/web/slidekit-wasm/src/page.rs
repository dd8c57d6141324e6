use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use slidekit_page_core::{Page, PageConfig, Section, Typewriter, TypewriterConfig};

use crate::{install_panic_hook, jsvalue_is_undefined_or_null};

fn page_config(config: JsValue) -> Result<PageConfig, JsError> {
    if jsvalue_is_undefined_or_null(&config) {
        Ok(PageConfig::default())
    } else {
        swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))
    }
}

#[wasm_bindgen]
pub struct WasmPage {
    core: Page,
}

#[wasm_bindgen]
impl WasmPage {
    /// `sections` is an array of `{ id, top }` in document order.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, sections: JsValue) -> Result<WasmPage, JsError> {
        install_panic_hook();
        let cfg = page_config(config)?;
        let sections: Vec<Section> = if jsvalue_is_undefined_or_null(&sections) {
            Vec::new()
        } else {
            swb::from_value(sections).map_err(|e| JsError::new(&format!("sections error: {e}")))?
        };
        Ok(WasmPage {
            core: Page::new(cfg, sections),
        })
    }

    /// Replace section geometry after a layout change.
    #[wasm_bindgen(js_name = setSections)]
    pub fn set_sections(&mut self, sections: JsValue) -> Result<(), JsError> {
        let sections: Vec<Section> = swb::from_value(sections)
            .map_err(|e| JsError::new(&format!("sections error: {e}")))?;
        self.core.spy_mut().set_sections(sections);
        Ok(())
    }

    /// Returns PageFrame JSON `{ chrome, active_section }`.
    #[wasm_bindgen(js_name = onScroll)]
    pub fn on_scroll(
        &mut self,
        scroll_y: f32,
        nav_height: Option<f32>,
        home_bottom: Option<f32>,
    ) -> Result<JsValue, JsError> {
        let frame = self.core.on_scroll(scroll_y, nav_height, home_bottom);
        swb::to_value(&frame).map_err(|e| JsError::new(&format!("frame error: {e}")))
    }

    #[wasm_bindgen(js_name = toggleMenu)]
    pub fn toggle_menu(&mut self) -> bool {
        self.core.toggle_menu()
    }

    #[wasm_bindgen(js_name = menuOpen)]
    pub fn menu_open(&self) -> bool {
        self.core.menu().is_open()
    }

    #[wasm_bindgen(js_name = followLink)]
    pub fn follow_link(&mut self, href: String, scroll_y: f32, nav_height: Option<f32>) -> bool {
        self.core.follow_link(&href, scroll_y, nav_height)
    }

    /// `element_top` is in document coordinates.
    #[wasm_bindgen(js_name = scrollIntoCenter)]
    pub fn scroll_into_center(
        &mut self,
        scroll_y: f32,
        element_top: f32,
        element_height: f32,
        viewport_height: f32,
    ) -> bool {
        self.core
            .scroll_into_center(scroll_y, element_top, element_height, viewport_height)
    }

    #[wasm_bindgen(js_name = scrollToTop)]
    pub fn scroll_to_top(&mut self, scroll_y: f32) -> bool {
        self.core.scroll_to_top(scroll_y)
    }

    /// Window position for this frame, or undefined when no scroll is running.
    pub fn tick(&mut self, dt_ms: u32) -> Option<f32> {
        self.core.tick(dt_ms)
    }

    /// Native wheel/touch input should be blocked while true.
    #[wasm_bindgen(js_name = locksNativeInput)]
    pub fn locks_native_input(&self) -> bool {
        self.core.is_scrolling()
    }
}

#[wasm_bindgen]
pub struct WasmTypewriter {
    core: Typewriter,
}

#[wasm_bindgen]
impl WasmTypewriter {
    /// `phrases` is an array of strings; `config` a partial TypewriterConfig.
    #[wasm_bindgen(constructor)]
    pub fn new(phrases: JsValue, config: JsValue) -> Result<WasmTypewriter, JsError> {
        install_panic_hook();
        let phrases: Vec<String> = swb::from_value(phrases)
            .map_err(|e| JsError::new(&format!("phrases error: {e}")))?;
        let cfg: TypewriterConfig = if jsvalue_is_undefined_or_null(&config) {
            TypewriterConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let core = Typewriter::new(phrases, cfg)
            .map_err(|e| JsError::new(&format!("typewriter error: {e}")))?;
        Ok(WasmTypewriter { core })
    }

    pub fn start(&mut self) -> bool {
        self.core.start()
    }

    #[wasm_bindgen(js_name = onVisibility)]
    pub fn on_visibility(&mut self, ratio: f32) -> bool {
        self.core.on_visibility(ratio)
    }

    /// Returns TypewriterFrame JSON `{ text, blinking, phrase_index }`.
    pub fn update(&mut self, dt_ms: u32) -> Result<JsValue, JsError> {
        let frame = self.core.update(dt_ms);
        swb::to_value(frame).map_err(|e| JsError::new(&format!("frame error: {e}")))
    }
}
