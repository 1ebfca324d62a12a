//! Error type shared by the behavior installers.
//!
//! Missing markup is never an error here: installers treat an absent element
//! as "nothing to do". These variants cover the browser environment itself
//! misbehaving, and the controller only logs them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced while wiring behaviors to the page.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There is no global `window` (not running in a browser).
    #[error("no global window")]
    NoWindow,

    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,

    /// Durable key-value storage is unavailable or refused a write.
    #[error("storage failed: {0}")]
    Storage(String),

    /// A browser API call threw.
    #[error("{context}: {message}")]
    Js { context: &'static str, message: String },

    /// The embedded configuration block is not valid JSON for [`crate::config::Config`].
    #[error("config parse failed: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(feature = "hydrate")]
impl Error {
    /// Wrap a thrown JS value with the name of the call that threw it.
    pub(crate) fn js(context: &'static str, value: &wasm_bindgen::JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js { context, message }
    }
}
