//! Input validation for job lists.
//!
//! Checks structural integrity of the jobs before any policy copies
//! them. Detects:
//! - Empty job list
//! - Duplicate names
//! - Empty names
//! - Negative cycle counts
//! - Total cycles that overflow the simulated clock
//!
//! Every problem is reported, not only the first.

use std::collections::HashSet;

use crate::error::SchedulerError;
use crate::models::Job;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No jobs were supplied.
    EmptyJobList,
    /// Two jobs share the same name.
    DuplicateName,
    /// A job has an empty name.
    EmptyName,
    /// A job has fewer than zero cycles.
    NegativeCycles,
    /// The cycle total does not fit in the `i64` clock.
    CycleOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a job list.
///
/// Checks:
/// 1. At least one job
/// 2. No empty names
/// 3. No duplicate names
/// 4. No negative cycle counts
/// 5. Cycle total fits in `i64`
///
/// Check 5 bounds every clock value a policy can reach, since each
/// completion time is at most the cycle total.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();

    if jobs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyJobList,
            "Job list is empty",
        ));
    }

    let mut names = HashSet::new();
    let mut total: Option<i64> = Some(0);
    for job in jobs {
        if job.name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Job with empty name",
            ));
        } else if !names.insert(job.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate job name: {}", job.name),
            ));
        }

        if job.cycles < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeCycles,
                format!("Job '{}' has {} cycles", job.name, job.cycles),
            ));
        } else {
            total = total.and_then(|t| t.checked_add(job.cycles));
        }
    }

    if total.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::CycleOverflow,
            format!("Total cycles exceed {}", i64::MAX),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates and converts the error list into a [`SchedulerError`].
pub(crate) fn ensure_valid(jobs: &[Job]) -> Result<(), SchedulerError> {
    validate_jobs(jobs).map_err(SchedulerError::InvalidInput)
}
