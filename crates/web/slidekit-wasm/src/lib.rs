use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use slidekit_carousel_core::{Carousel, CarouselConfig, Direction, Inputs, MoveOutcome, Outputs};

mod page;
mod surface;

pub use page::{WasmPage, WasmTypewriter};
pub use surface::JsSurface;

pub(crate) fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

pub(crate) fn install_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct WasmCarousel {
    core: Carousel<JsSurface>,
}

#[wasm_bindgen]
impl WasmCarousel {
    /// Create a carousel over `slide_count` original slides.
    /// `config` is a partial CarouselConfig object or undefined/null for defaults;
    /// `host` is the surface object described in `surface.rs`.
    /// Example:
    ///   new WasmCarousel(5, { transition_duration_ms: 400 }, host)
    #[wasm_bindgen(constructor)]
    pub fn new(slide_count: usize, config: JsValue, host: JsValue) -> Result<WasmCarousel, JsError> {
        install_panic_hook();

        let cfg: CarouselConfig = if jsvalue_is_undefined_or_null(&config) {
            CarouselConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let surface = JsSurface::from_host(&host)?;
        let core = Carousel::new(slide_count, cfg, surface)
            .map_err(|e| JsError::new(&format!("carousel error: {e}")))?;
        Ok(WasmCarousel { core })
    }

    /// "next" button. Returns false if a transition was still running.
    pub fn next(&mut self) -> Result<bool, JsError> {
        self.step(Direction::Next)
    }

    /// "previous" button. Returns false if a transition was still running.
    pub fn prev(&mut self) -> Result<bool, JsError> {
        self.step(Direction::Prev)
    }

    /// Programmatic jump to an original slide; throws for out-of-range indices.
    #[wasm_bindgen(js_name = jumpTo)]
    pub fn jump_to(&mut self, index: usize) -> Result<bool, JsError> {
        let outcome = self
            .core
            .jump_to_original(index)
            .map_err(|e| JsError::new(&format!("jumpTo error: {e}")))?;
        Ok(outcome == MoveOutcome::Moved)
    }

    #[wasm_bindgen(js_name = dotClicked)]
    pub fn dot_clicked(&mut self, index: usize) -> bool {
        self.core.activate_dot(index) == MoveOutcome::Moved
    }

    pub fn resize(&mut self) {
        self.core.on_resize();
    }

    pub fn ready(&mut self) {
        self.core.on_ready();
    }

    /// Step the controller clock by `dt_ms` with queued commands (Inputs JSON).
    /// Returns Outputs JSON `{ events }`.
    pub fn update(&mut self, dt_ms: u32, inputs: JsValue) -> Result<JsValue, JsError> {
        let inputs: Inputs = if jsvalue_is_undefined_or_null(&inputs) {
            Inputs::default()
        } else {
            swb::from_value(inputs).map_err(|e| JsError::new(&format!("inputs error: {e}")))?
        };
        let out: &Outputs = self.core.update(dt_ms, inputs);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    #[wasm_bindgen(js_name = activeIndex)]
    pub fn active_index(&self) -> usize {
        self.core.active_original_index()
    }

    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.core.current_index()
    }

    #[wasm_bindgen(js_name = isTransitioning)]
    pub fn is_transitioning(&self) -> bool {
        self.core.is_transitioning()
    }

    #[wasm_bindgen(js_name = slideCount)]
    pub fn slide_count(&self) -> usize {
        self.core.slide_count()
    }
}

impl WasmCarousel {
    fn step(&mut self, direction: Direction) -> Result<bool, JsError> {
        let outcome = self
            .core
            .advance(direction)
            .map_err(|e| JsError::new(&format!("navigation error: {e}")))?;
        Ok(outcome == MoveOutcome::Moved)
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
