//! Error - failures surfaced while attaching an effect

use thiserror::Error;

/// Everything that can go wrong before an effect is running.
///
/// Once attached, nothing here is raised: numeric anomalies (a zero-size
/// viewport) flow into the style string as `NaN`/`Infinity`.
#[derive(Debug, Error)]
pub enum ParallaxError {
    #[error("no element matches selector `{selector}`")]
    TargetNotFound { selector: String },

    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("invalid parallax options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("host unavailable: {0}")]
    Host(String),
}

impl ParallaxError {
    pub fn target_not_found(selector: &str) -> Self {
        Self::TargetNotFound {
            selector: selector.to_string(),
        }
    }
}

impl From<ParallaxError> for wasm_bindgen::JsValue {
    fn from(err: ParallaxError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_not_found_names_selector() {
        let err = ParallaxError::target_not_found("#scene");
        assert_eq!(err.to_string(), "no element matches selector `#scene`");
    }

    #[test]
    fn options_error_wraps_serde() {
        let err: ParallaxError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ParallaxError::InvalidOptions(_)));
        assert!(err.to_string().starts_with("invalid parallax options"));
    }
}
