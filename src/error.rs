//! Error types for the workforce analytics engine.
//!
//! Only structurally invalid input aborts a run. Degenerate but well-formed
//! input (an empty roster, a department without team leads) is handled by the
//! analyzers themselves and never reaches this type.

use thiserror::Error;

/// The main error type for the workforce analytics engine.
///
/// # Example
///
/// ```
/// use workforce_analytics::error::AnalyticsError;
///
/// let error = AnalyticsError::MissingField {
///     field: "work_info".to_string(),
///     entry: 3,
/// };
/// assert_eq!(error.to_string(), "Employee entry 3 is missing required field 'work_info'");
/// ```
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// A raw employee entry lacks a structurally required field.
    #[error("Employee entry {entry} is missing required field '{field}'")]
    MissingField {
        /// The name of the missing field.
        field: String,
        /// Zero-based position of the entry in the input sequence.
        entry: usize,
    },

    /// A raw employee field is present but has the wrong shape.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidField {
        /// The field (or entry) that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The roster document was not found or could not be read.
    #[error("Roster document not found: {path}")]
    DataNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The roster document is not valid JSON or has no employee list.
    #[error("Failed to parse roster document '{path}': {message}")]
    DataParseError {
        /// The path of the document that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl AnalyticsError {
    /// Returns true if this error reports a missing required field.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, AnalyticsError::MissingField { .. })
    }
}

/// A type alias for Results that return AnalyticsError.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_displays_field_and_entry() {
        let error = AnalyticsError::MissingField {
            field: "hire_date".to_string(),
            entry: 0,
        };
        assert_eq!(
            error.to_string(),
            "Employee entry 0 is missing required field 'hire_date'"
        );
        assert!(error.is_missing_field());
    }

    #[test]
    fn test_invalid_field_displays_field_and_message() {
        let error = AnalyticsError::InvalidField {
            field: "birth_date".to_string(),
            message: "input contains invalid characters".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'birth_date': input contains invalid characters"
        );
        assert!(!error.is_missing_field());
    }

    #[test]
    fn test_data_parse_error_displays_path_and_message() {
        let error = AnalyticsError::DataParseError {
            path: "company.json".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse roster document 'company.json': expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = AnalyticsError::ConfigNotFound {
            path: "/missing/analysis.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/analysis.yaml"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<AnalyticsError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing() -> AnalyticsResult<()> {
            Err(AnalyticsError::MissingField {
                field: "employee_id".to_string(),
                entry: 7,
            })
        }

        fn propagates_error() -> AnalyticsResult<()> {
            returns_missing()?;
            Ok(())
        }

        assert!(propagates_error().unwrap_err().is_missing_field());
    }
}
