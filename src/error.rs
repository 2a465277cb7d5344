//! Browser Boundary Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    ConfigValue(String),
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(AppError::NoWindow.to_string(), "window is not available");
        assert_eq!(
            AppError::Dom("createElement".into()).to_string(),
            "DOM call failed: createElement"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().starts_with("invalid config:"));
    }

    #[test]
    fn test_config_value_message() {
        let err = AppError::ConfigValue("zoom.step must be positive".into());
        assert_eq!(err.to_string(), "invalid config value: zoom.step must be positive");
    }
}
