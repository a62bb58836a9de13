//! Input validation for grouping requests.
//!
//! Checks a roster and configuration before any search runs. Detects:
//! - Rosters with fewer than two members
//! - Group sizes below 2 or above the roster size
//! - Search budgets below the configured floor
//! - Zero rounds
//! - Case-insensitive duplicate labels when repeat avoidance is on
//!
//! A failed validation declines the request: no partition is produced and
//! no history is touched.

use std::fmt;

use crate::config::{GroupingConfig, ValidationLimits};
use crate::models::Roster;

/// Validation result.
pub type ValidationResult = Result<(), ValidationErrors>;

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
    /// Fewer than two roster members.
    TooFewEntities,
    /// Group size below 2.
    GroupSizeTooSmall,
    /// Group size larger than the roster.
    GroupSizeExceedsRoster,
    /// Search budget below the floor.
    IterationsBelowFloor,
    /// Zero rounds requested.
    RoundsBelowOne,
    /// Labels repeat case-insensitively while repeat avoidance is on.
    DuplicateLabels,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Every problem found in one request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    /// Whether an error of `kind` was reported.
    pub fn contains(&self, kind: &ValidationErrorKind) -> bool {
        self.0.iter().any(|e| &e.kind == kind)
    }

    /// Reported errors.
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Number of reported errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates a roster and configuration.
///
/// Checks:
/// 1. At least two members
/// 2. No case-insensitive duplicates when `avoid_repeats` is set
/// 3. `group_size >= 2`
/// 4. `iterations >= limits.min_iterations`
/// 5. `group_size <= roster.len()`
/// 6. `rounds >= 1`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(
    roster: &Roster,
    config: &GroupingConfig,
    limits: &ValidationLimits,
) -> ValidationResult {
    let mut errors = Vec::new();

    if roster.len() < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewEntities,
            "Add at least two names to generate groups.",
        ));
    }

    if config.avoid_repeats {
        let duplicates = roster.duplicates();
        if !duplicates.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateLabels,
                format!(
                    "Duplicate names found: {}. Add initials or nicknames to keep history accurate.",
                    duplicates.join(", ")
                ),
            ));
        }
    }

    if config.group_size < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::GroupSizeTooSmall,
            "Group size must be 2 or more.",
        ));
    }

    if config.iterations < limits.min_iterations {
        errors.push(ValidationError::new(
            ValidationErrorKind::IterationsBelowFloor,
            format!("Search depth must be {} or more.", limits.min_iterations),
        ));
    }

    // Only meaningful once the roster itself is usable.
    if roster.len() >= 2 && config.group_size > roster.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::GroupSizeExceedsRoster,
            "Group size cannot exceed total names.",
        ));
    }

    if config.rounds < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::RoundsBelowOne,
            "Rounds must be 1 or more.",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
