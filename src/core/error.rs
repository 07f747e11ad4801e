use thiserror::Error;

/// Errors that can occur while building records or running the back office.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AcademyError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing input.
    #[error("builder error: {0}")]
    Builder(String),

    /// Receipt number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// Invalid configuration value.
    #[error("config error: {0}")]
    Config(String),

    /// Preference storage could not be read or written.
    #[error("preferences error: {0}")]
    Preferences(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[cfg(feature = "prefs")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "bank_account.iban").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Create a validation error for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Join a list of validation errors into a single [`AcademyError::Validation`].
pub(crate) fn join_errors(errors: &[ValidationError]) -> AcademyError {
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    AcademyError::Validation(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_field() {
        let e = ValidationError::new("student.email", "must contain '@'");
        assert_eq!(e.to_string(), "student.email: must contain '@'");
    }

    #[test]
    fn errors_joined_with_semicolon() {
        let err = join_errors(&[
            ValidationError::new("a", "first"),
            ValidationError::new("b", "second"),
        ]);
        assert_eq!(err.to_string(), "validation failed: a: first; b: second");
    }
}
