//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by policy construction, dispatch, and job loading.
///
/// All failures are deterministic; none are retryable.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The job list failed validation. Carries every detected issue.
    #[error("invalid job list: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
    /// Round Robin was asked to run with a quantum that cannot make progress.
    #[error("round robin quantum must be positive, got {0}")]
    InvalidQuantum(i64),
    /// A job or config document could not be parsed.
    #[error("failed to parse input document: {0}")]
    Parse(#[from] serde_json::Error),
    /// Reports could not be serialized for output.
    #[error("failed to serialize reports: {0}")]
    Serialize(#[source] serde_json::Error),
    /// An input document could not be read.
    #[error("failed to read input document: {0}")]
    Io(#[from] std::io::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_message_lists_all_errors() {
        let err = SchedulerError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::DuplicateName, "Duplicate job name: A"),
            ValidationError::new(ValidationErrorKind::NegativeCycles, "Job 'B' has -1 cycles"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid job list: Duplicate job name: A; Job 'B' has -1 cycles"
        );
    }

    #[test]
    fn test_parse_and_serialize_messages_differ() {
        let json_err = || serde_json::from_str::<i64>("x").unwrap_err();
        let parse = SchedulerError::from(json_err()).to_string();
        let serialize = SchedulerError::Serialize(json_err()).to_string();
        assert!(parse.starts_with("failed to parse input document"));
        assert!(serialize.starts_with("failed to serialize reports"));
    }

    #[test]
    fn test_invalid_quantum_message() {
        assert_eq!(
            SchedulerError::InvalidQuantum(0).to_string(),
            "round robin quantum must be positive, got 0"
        );
    }
}
