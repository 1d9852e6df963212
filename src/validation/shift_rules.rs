//! Shift validation rules.
//!
//! A roster is acceptable when every shift starts on a permitted hour and no
//! shift slot holds as many employees as the slot capacity.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RosterError, RosterResult};
use crate::models::Employee;

/// Start hours of the three 8-hour shifts in a day.
pub const DEFAULT_PERMITTED_START_HOURS: [u32; 3] = [0, 8, 16];

/// Number of employees that fills a shift slot.
pub const DEFAULT_MAX_PER_SLOT: usize = 3;

/// Message returned when a roster passes validation.
pub const SHIFTS_VALID_MESSAGE: &str = "Shifts are valid";

/// The outcome of validating a roster.
///
/// A rejection is an expected result, not an error: it carries a
/// human-readable diagnostic that the API returns to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the roster is acceptable.
    pub ok: bool,
    /// Confirmation or diagnostic message.
    pub message: String,
}

impl Verdict {
    /// A passing verdict with the standard confirmation message.
    pub fn accepted() -> Self {
        Self {
            ok: true,
            message: SHIFTS_VALID_MESSAGE.to_string(),
        }
    }

    /// A failing verdict with the given diagnostic.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }

    /// Converts a rejection into [`RosterError::ShiftRejected`].
    pub fn into_result(self) -> RosterResult<()> {
        if self.ok {
            Ok(())
        } else {
            Err(RosterError::ShiftRejected {
                message: self.message,
            })
        }
    }
}

/// The configurable parameters of shift validation.
///
/// # Example
///
/// ```
/// use shift_roster::models::Employee;
/// use shift_roster::validation::ShiftRules;
///
/// let rules = ShiftRules::default();
/// let verdict = rules
///     .validate(&[Employee::new("Alice", "00:00 to 08:00")])
///     .unwrap();
/// assert!(verdict.ok);
/// assert_eq!(verdict.message, "Shifts are valid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftRules {
    /// Hours a shift may start on.
    pub permitted_start_hours: Vec<u32>,
    /// Occupancy at which a shift slot is considered overbooked.
    pub max_per_slot: usize,
}

impl Default for ShiftRules {
    fn default() -> Self {
        Self {
            permitted_start_hours: DEFAULT_PERMITTED_START_HOURS.to_vec(),
            max_per_slot: DEFAULT_MAX_PER_SLOT,
        }
    }
}

impl ShiftRules {
    /// Validates a roster against the start-hour and slot-capacity rules.
    ///
    /// Employees are checked in order and the first failure is returned.
    /// Slots are keyed by the start token of the shift text, so `"08:00"` and
    /// `"08:30"` are different slots.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidShiftFormat`] when a shift has no
    /// parsable start hour. Rule violations are reported through the
    /// returned [`Verdict`] instead.
    pub fn validate(&self, employees: &[Employee]) -> RosterResult<Verdict> {
        let mut occupancy: HashMap<&str, usize> = HashMap::new();

        for employee in employees {
            let start = employee.shift_start()?;

            if !self.permitted_start_hours.contains(&start.hour) {
                debug!(
                    employee = %employee.name,
                    shift = %employee.shift,
                    "Shift starts outside permitted hours"
                );
                return Ok(Verdict::rejected(format!(
                    "Invalid shift timing for {}: {}",
                    employee.name, employee.shift
                )));
            }

            let occupants = occupancy.entry(start.token).or_insert(0);
            *occupants += 1;
            if *occupants >= self.max_per_slot {
                debug!(
                    employee = %employee.name,
                    slot = start.token,
                    occupants = *occupants,
                    "Shift slot is full"
                );
                return Ok(Verdict::rejected(format!(
                    "{} already has a shift on {}",
                    employee.name, start.token
                )));
            }
        }

        Ok(Verdict::accepted())
    }
}

/// Validates a roster with the default rules.
///
/// # Example
///
/// ```
/// use shift_roster::models::Employee;
/// use shift_roster::validation::validate_shifts;
///
/// let verdict = validate_shifts(&[Employee::new("Bob", "09:00 to 17:00")]).unwrap();
/// assert!(!verdict.ok);
/// assert_eq!(verdict.message, "Invalid shift timing for Bob: 09:00 to 17:00");
/// ```
pub fn validate_shifts(employees: &[Employee]) -> RosterResult<Verdict> {
    ShiftRules::default().validate(employees)
}
