//! Browser bridge
//!
//! JS owns the canvas, the DOM scoreboard and the requestAnimationFrame
//! loop; it calls `frame` once per refresh and draws from `view_json`.

use std::collections::HashSet;

use wasm_bindgen::prelude::*;

use crate::session::Session;
use crate::tuning::Tuning;

#[wasm_bindgen]
pub struct WebSession {
    session: Session,
    held: HashSet<String>,
}

#[wasm_bindgen]
impl WebSession {
    /// Start a session; `tuning_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: &str) -> Result<WebSession, JsValue> {
        console_error_panic_hook::set_once();
        // A second session on the same page finds the logger already set
        let _ = console_log::init_with_level(log::Level::Info);

        let tuning = if tuning_json.trim().is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        log::info!("Brick Dash session starting");
        Ok(WebSession {
            session: Session::with_tuning(tuning),
            held: HashSet::new(),
        })
    }

    pub fn key_down(&mut self, code: &str) {
        self.held.insert(code.to_string());
    }

    pub fn key_up(&mut self, code: &str) {
        self.held.remove(code);
    }

    /// Run one refresh; returns the `FrameOutput` as JSON
    pub fn frame(&mut self) -> Result<String, JsValue> {
        let input = super::input_from_keys(self.held.iter().map(String::as_str));
        let output = self.session.frame(input);
        serde_json::to_string(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn restart(&mut self) -> Result<String, JsValue> {
        let output = self.session.restart();
        serde_json::to_string(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Everything the renderer draws this frame
    pub fn view_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.view()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
