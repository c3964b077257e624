//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`FolioError`]
//! via `#[from]` when crossing a port boundary.

/// Top-level error for the folio workspace.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// A value failed a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// An element a feature depends on is absent from the page.
    #[error("required element missing")]
    MissingElement(#[from] MissingElementError),

    /// The key-value store (or any other persistence) failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The value is not one of `light` / `dark`.
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
}

/// A page element could not be located.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("element `{selector}` not found")]
pub struct MissingElementError {
    /// CSS selector (or id) that matched nothing.
    pub selector: String,
}

impl MissingElementError {
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_folio_error() {
        let err: FolioError = "sepia".parse::<crate::theme::ThemeMode>().unwrap_err().into();
        assert!(matches!(
            err,
            FolioError::Validation(ValidationError::UnknownTheme(ref value)) if value == "sepia"
        ));
    }

    #[test]
    fn should_display_missing_element_selector() {
        let err = MissingElementError::new("#contactForm");
        assert_eq!(err.to_string(), "element `#contactForm` not found");
    }

    #[test]
    fn should_expose_storage_source() {
        let io = std::io::Error::other("quota exceeded");
        let err = FolioError::Storage(Box::new(io));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "quota exceeded");
    }
}
