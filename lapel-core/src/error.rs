use thiserror::Error;

/// Failures the configurator core can report.
///
/// None of these are meant to reach a global handler: configuration and
/// storage errors are absorbed by the precedence chain, image and clipboard
/// errors cancel only the action that triggered them.
#[derive(Error, Debug)]
pub enum LapelError {
    /// A query string or stored payload did not describe a full configuration.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    /// Persistent storage could not be read or written.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The pattern asset for the preview failed to load.
    #[error("pattern '{pattern}' failed to load: {reason}")]
    ImageLoadFailure { pattern: String, reason: String },

    /// No drawing surface could be created.
    #[error("rendering unavailable: {0}")]
    RenderingUnavailable(String),

    /// Neither the clipboard API nor the scripted fallback worked.
    #[error("clipboard failure: {0}")]
    ClipboardFailure(String),

    /// The native share sheet was missing, rejected the payload or was
    /// dismissed by the user.
    #[error("share declined: {0}")]
    ShareDeclined(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl LapelError {
    pub(crate) fn missing(field: &'static str) -> Self {
        LapelError::InvalidConfiguration {
            field,
            reason: "is missing".to_string(),
        }
    }

    pub(crate) fn unknown_value(field: &'static str, value: &str) -> Self {
        LapelError::InvalidConfiguration {
            field,
            reason: format!("has unknown value '{value}'"),
        }
    }
}

pub type Result<T> = std::result::Result<T, LapelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismissed_share_is_not_a_clipboard_failure() {
        let err = LapelError::ShareDeclined("AbortError".to_string());
        assert_eq!(err.to_string(), "share declined: AbortError");
        assert!(!matches!(err, LapelError::ClipboardFailure(_)));
    }

    #[test]
    fn missing_field_message() {
        assert_eq!(
            LapelError::missing("trim").to_string(),
            "invalid configuration: trim is missing"
        );
    }
}
