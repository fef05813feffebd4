//! JavaScript bindings for pricefield
//!
//! Thin wrapper around `pricefield-core` compiled to WebAssembly.
//! ZERO logic here — the only code of its own adapts an `HTMLInputElement`
//! to `PriceField` and registers the focus/blur/submit listeners.
//!
//! ```js
//! import init, { attachToForm } from "./pricefield_wasm.js";
//!
//! await init();
//! document.addEventListener("DOMContentLoaded", () => {
//!   const form = document.querySelector("form");
//!   if (form) attachToForm(form);
//! });
//! ```

use pricefield_core::{FieldConfig, PriceField, PriceFieldController};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The price `<input>` element
    #[wasm_bindgen(js_name = HTMLInputElement)]
    #[derive(Debug, Clone)]
    pub type InputElement;

    #[wasm_bindgen(method, getter)]
    fn value(this: &InputElement) -> String;

    #[wasm_bindgen(method, setter)]
    fn set_value(this: &InputElement, value: &str);

    #[wasm_bindgen(method, js_name = addEventListener)]
    fn add_input_listener(this: &InputElement, kind: &str, listener: &Closure<dyn FnMut()>);

    /// The `<form>` that submits the price
    #[wasm_bindgen(js_name = HTMLFormElement)]
    #[derive(Debug, Clone)]
    pub type FormElement;

    #[wasm_bindgen(method, js_name = addEventListener)]
    fn add_form_listener(this: &FormElement, kind: &str, listener: &Closure<dyn FnMut()>);

    #[wasm_bindgen(method, js_name = querySelector)]
    fn query_selector(this: &FormElement, selectors: &str) -> Option<InputElement>;
}

struct DomField(InputElement);

impl PriceField for DomField {
    fn text(&self) -> String {
        self.0.value()
    }

    fn set_text(&mut self, text: &str) {
        self.0.set_value(text);
    }
}

type Handler = fn(&mut PriceFieldController<DomField>);

fn listener(input: &InputElement, handler: Handler) -> Closure<dyn FnMut()> {
    let input = input.clone();
    Closure::wrap(Box::new(move || {
        let mut controller = PriceFieldController::new(DomField(input.clone()));
        handler(&mut controller);
    }) as Box<dyn FnMut()>)
}

fn config_from(config_json: Option<String>) -> Result<FieldConfig, JsError> {
    match config_json {
        Some(text) => FieldConfig::from_json(&text).map_err(|e| JsError::new(&e.to_string())),
        None => Ok(FieldConfig::default()),
    }
}

/// Normalize typed price text to a canonical dot-decimal value.
///
/// @param raw - text as typed (`"1.234,56"`, `"2.5k"`, ...)
/// @returns canonical value, or `""` when there is no price
#[wasm_bindgen]
pub fn normalize(raw: &str) -> String {
    pricefield_core::normalize(raw)
}

/// Format a canonical value for display (`"1234.5"` → `"1.234,5"`).
#[wasm_bindgen]
pub fn format(canonical: &str) -> String {
    pricefield_core::format(canonical)
}

/// Value a form submit sends for `raw`.
///
/// @returns dot-decimal string with at most two decimals, or `undefined`
///   when the field should be left untouched
#[wasm_bindgen(js_name = "submitValue")]
pub fn submit_value(raw: &str) -> Option<String> {
    pricefield_core::submit_value(raw)
}

/// Whole-amount label (`"1200000"` → `"$1.200.000 COP"`).
///
/// @param value - integer amount
/// @param configJson - optional JSON field configuration
/// @returns the label, or `undefined` when `value` is not a number
/// @throws Error if `configJson` is invalid
#[wasm_bindgen(js_name = "formatPriceLabel")]
pub fn format_price_label(value: &str, config_json: Option<String>) -> Result<Option<String>, JsError> {
    let config = config_from(config_json)?;
    Ok(pricefield_core::format_price_label(value, &config))
}

/// Bind focus/blur handlers to `input` and the submit handler to `form`.
///
/// Listeners live as long as the page.
#[wasm_bindgen(js_name = "attachPriceField")]
pub fn attach_price_field(form: &FormElement, input: &InputElement) {
    let on_focus = listener(input, PriceFieldController::on_focus);
    input.add_input_listener("focus", &on_focus);
    on_focus.forget();

    let on_blur = listener(input, PriceFieldController::on_blur);
    input.add_input_listener("blur", &on_blur);
    on_blur.forget();

    let on_submit = listener(input, PriceFieldController::on_submit);
    form.add_form_listener("submit", &on_submit);
    on_submit.forget();
}

/// Find the configured price input inside `form` and attach to it.
///
/// @param configJson - optional JSON field configuration
/// @returns `true` when the input was found
/// @throws Error if `configJson` is invalid
#[wasm_bindgen(js_name = "attachToForm")]
pub fn attach_to_form(form: &FormElement, config_json: Option<String>) -> Result<bool, JsError> {
    let config = config_from(config_json)?;
    match form.query_selector(&config.input_selector()) {
        Some(input) => {
            attach_price_field(form, &input);
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Version of the underlying `pricefield-core`.
#[wasm_bindgen]
pub fn version() -> String {
    pricefield_core::VERSION.to_string()
}
