//! Garde validation utilities.

use crate::error::DomainError;
use garde::{Report, Validate};

/// Convert a garde validation report to DomainError
pub fn validate_struct<T>(value: &T) -> Result<(), DomainError>
where
    T: Validate,
    T::Context: Default,
{
    value
        .validate()
        .map_err(|report| DomainError::ValidationError(format_validation_errors(&report)))
}

/// Format validation errors from a garde Report into a human-readable string.
/// Messages that already quote their own field name are kept verbatim so the
/// wire-level constraint messages stay stable.
fn format_validation_errors(report: &Report) -> String {
    report
        .iter()
        .map(|(path, error)| {
            let path = path.to_string();
            let message = error.message().to_string();
            if path.is_empty() || message.starts_with(&format!("\"{path}\"")) {
                message
            } else {
                format!("{path}: {message}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
