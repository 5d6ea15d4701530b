//! Errors raised while attaching the backdrop to a page.

use wasm_bindgen::JsValue;

/// Why the backdrop could not be attached. None of these are fatal to the
/// page: the caller logs the error and the effect is simply absent.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
	/// Not running in a browser window.
	#[error("no global window")]
	NoWindow,
	/// The window has no document.
	#[error("window has no document")]
	NoDocument,
	/// The document has no `<body>` yet.
	#[error("document has no body")]
	NoBody,
	/// `getContext("2d")` returned nothing.
	#[error("2d canvas context unavailable")]
	ContextUnavailable,
	/// A DOM call threw.
	#[error("DOM call failed: {0}")]
	Js(String),
}

impl From<JsValue> for MountError {
	fn from(value: JsValue) -> Self {
		MountError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
