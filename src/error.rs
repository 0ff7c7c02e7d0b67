use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from browser APIs. None of these are fatal to the page; callers
/// log them and leave the affected widget as it is.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element matches {0}")]
    NotFound(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}
