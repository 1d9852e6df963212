//! Error types for the shift roster service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! validating shifts, or operating on the roster.

use thiserror::Error;

/// The main error type for the shift roster service.
///
/// A validation rejection is reported as [`RosterError::ShiftRejected`] by the
/// service layer; the validator itself returns a [`Verdict`] for rejections and
/// only errors on malformed shift text.
///
/// [`Verdict`]: crate::validation::Verdict
///
/// # Example
///
/// ```
/// use shift_roster::error::RosterError;
///
/// let error = RosterError::DuplicateName {
///     name: "Alice".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee already exists in the system: Alice");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
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

    /// Shift text could not be parsed into a start hour.
    #[error("Malformed shift '{shift}' for {employee}: {reason}")]
    InvalidShiftFormat {
        /// The employee the shift belongs to.
        employee: String,
        /// The raw shift text.
        shift: String,
        /// What was wrong with the text.
        reason: String,
    },

    /// The shift validator rejected the roster.
    #[error("{message}")]
    ShiftRejected {
        /// The validator's diagnostic.
        message: String,
    },

    /// Another stored employee already has this name.
    #[error("Employee already exists in the system: {name}")]
    DuplicateName {
        /// The conflicting name.
        name: String,
    },

    /// No employee record has the given identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: String,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
