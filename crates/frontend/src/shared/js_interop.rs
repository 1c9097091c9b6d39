//! Host browser interop
//!
//! Thin wrappers over `window` functions. Callers treat the result as an
//! external answer; nothing in the domain depends on it.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteropError {
    #[error("no browser window available")]
    NoWindow,

    #[error("host call failed: {0}")]
    Host(String),
}

/// Ask the user for a line of text via `window.prompt`
///
/// Blocks until the user answers. Returns `Ok(None)` when the dialog is
/// cancelled.
///
/// # Example
/// ```rust,ignore
/// if let Ok(Some(name)) = prompt("First name?") {
///     log::info!("user typed {}", name);
/// }
/// ```
pub fn prompt(message: &str) -> Result<Option<String>, InteropError> {
    let window = web_sys::window().ok_or(InteropError::NoWindow)?;
    window
        .prompt_with_message(message)
        .map_err(|e| InteropError::Host(describe_js_error(&e)))
}

fn describe_js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
