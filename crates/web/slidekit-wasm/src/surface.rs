//! `RenderSurface` backed by a JS host object.
//!
//! The host object provides:
//! - `measure() -> { width, gap }`
//! - `setOffset({ offset, animated, duration_ms, transform, transition })`
//! - `setSlideState(original, className)`
//! - `setDotActive(dot, active)`
//! - `mount(track)` (optional) to create clone elements and dots

use js_sys::{Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use slidekit_carousel_core::render::{transition, translate_x};
use slidekit_carousel_core::{DisplayState, RenderSurface, SlideExtent, Track};

#[derive(Serialize)]
struct OffsetInstruction {
    offset: f32,
    animated: bool,
    duration_ms: u32,
    transform: String,
    transition: String,
}

pub struct JsSurface {
    measure: Function,
    set_offset: Function,
    set_slide_state: Function,
    set_dot_active: Function,
    mount: Option<Function>,
}

fn method(host: &JsValue, name: &str) -> Result<Option<Function>, JsError> {
    let value = Reflect::get(host, &JsValue::from_str(name))
        .map_err(|e| JsError::new(&format!("host.{name}: {:?}", e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    value
        .dyn_into::<Function>()
        .map(Some)
        .map_err(|_| JsError::new(&format!("host.{name} is not a function")))
}

fn required(host: &JsValue, name: &str) -> Result<Function, JsError> {
    method(host, name)?.ok_or_else(|| JsError::new(&format!("host.{name} is missing")))
}

impl JsSurface {
    pub fn from_host(host: &JsValue) -> Result<Self, JsError> {
        if !host.is_object() {
            return Err(JsError::new("host must be an object"));
        }
        Ok(Self {
            measure: required(host, "measure")?,
            set_offset: required(host, "setOffset")?,
            set_slide_state: required(host, "setSlideState")?,
            set_dot_active: required(host, "setDotActive")?,
            mount: method(host, "mount")?,
        })
    }
}

impl RenderSurface for JsSurface {
    fn measure(&self) -> SlideExtent {
        // Anything unreadable is treated as "not laid out yet".
        match self.measure.call0(&JsValue::UNDEFINED) {
            Ok(val) => swb::from_value(val).unwrap_or_default(),
            Err(_) => SlideExtent::default(),
        }
    }

    fn set_offset(&mut self, offset: f32, animated: bool, duration_ms: u32) {
        let instruction = OffsetInstruction {
            offset,
            animated,
            duration_ms,
            transform: translate_x(offset),
            transition: transition(animated, duration_ms),
        };
        if let Ok(arg) = swb::to_value(&instruction) {
            let _ = self.set_offset.call1(&JsValue::UNDEFINED, &arg);
        }
    }

    fn set_slide_state(&mut self, original: usize, state: DisplayState) {
        let _ = self.set_slide_state.call2(
            &JsValue::UNDEFINED,
            &JsValue::from(original as u32),
            &JsValue::from_str(state.class_name()),
        );
    }

    fn set_dot_active(&mut self, dot: usize, active: bool) {
        let _ = self.set_dot_active.call2(
            &JsValue::UNDEFINED,
            &JsValue::from(dot as u32),
            &JsValue::from_bool(active),
        );
    }

    fn mount(&mut self, track: &Track) {
        let Some(mount) = &self.mount else {
            return;
        };
        if let Ok(arg) = swb::to_value(track) {
            let _ = mount.call1(&JsValue::UNDEFINED, &arg);
        }
    }
}
