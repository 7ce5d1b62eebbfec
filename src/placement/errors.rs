//! Error types for tooltip placement
//!
//! Configuration errors are raised to the caller synchronously. Missing
//! content is not an error, and stale deferred tasks are silent no-ops.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Top-level placement error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// Explicit side preference outside of top/bottom/right/left
    #[error("Incorrect value of \"ttip-position\" attr: {value}")]
    InvalidConfiguration { value: String },

    /// Internal consistency error (should not happen, indicates a bug)
    #[error("Internal placement error: {0}")]
    Internal(String),

    /// A DOM primitive was unavailable or failed
    #[error("DOM error: {0}")]
    Dom(String),
}

impl PlacementError {
    /// Wrap a JS exception raised by a DOM call
    pub fn dom(context: &str, err: JsValue) -> Self {
        PlacementError::Dom(format!("{}: {:?}", context, err))
    }
}

impl From<PlacementError> for JsValue {
    fn from(err: PlacementError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_message_names_value() {
        let err = PlacementError::InvalidConfiguration { value: "diagonal".into() };
        assert_eq!(err.to_string(), "Incorrect value of \"ttip-position\" attr: diagonal");
    }
}
