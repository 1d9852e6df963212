//! Employee model and related types.
//!
//! This module defines the [`Employee`] roster entry and the
//! [`StoredEmployee`] record kept by the employee store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RosterError, RosterResult};

use super::shift::ShiftStart;

/// An employee and the shift they are assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's name. Unique across the stored roster.
    pub name: String,
    /// The assigned shift, e.g. `"08:00 to 16:00"`.
    pub shift: String,
}

impl Employee {
    /// Creates a new employee with the given name and shift text.
    pub fn new(name: impl Into<String>, shift: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shift: shift.into(),
        }
    }

    /// Parses the start of this employee's shift.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidShiftFormat`] if the shift text has no
    /// parsable start hour.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_roster::models::Employee;
    ///
    /// let employee = Employee::new("Alice", "16:00 to 24:00");
    /// assert_eq!(employee.shift_start().unwrap().hour, 16);
    ///
    /// let broken = Employee::new("Bob", "evening");
    /// assert!(broken.shift_start().is_err());
    /// ```
    pub fn shift_start(&self) -> RosterResult<ShiftStart<'_>> {
        ShiftStart::parse(&self.shift).map_err(|reason| RosterError::InvalidShiftFormat {
            employee: self.name.clone(),
            shift: self.shift.clone(),
            reason: reason.to_string(),
        })
    }
}

/// An employee record as held by the store.
///
/// The identifier is serialized as `_id` so that clients written against a
/// document database see the field they expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEmployee {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// The employee's name.
    pub name: String,
    /// The assigned shift text.
    pub shift: String,
    /// When the record was inserted.
    pub created_at: DateTime<Utc>,
    /// When the record was last replaced.
    pub updated_at: DateTime<Utc>,
}

impl StoredEmployee {
    /// Creates a fresh record for the employee with a new identifier.
    pub fn new(employee: Employee) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: employee.name,
            shift: employee.shift,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the roster entry for this record.
    pub fn employee(&self) -> Employee {
        Employee::new(self.name.clone(), self.shift.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{"name": "David", "shift": "00:00 to 08:00"}"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.name, "David");
        assert_eq!(employee.shift, "00:00 to 08:00");
    }

    #[test]
    fn test_deserialize_employee_missing_shift_fails() {
        let json = r#"{"name": "David"}"#;
        let result: Result<Employee, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_shift_start_error_names_employee() {
        let employee = Employee::new("Emma", "");
        match employee.shift_start() {
            Err(RosterError::InvalidShiftFormat {
                employee, shift, ..
            }) => {
                assert_eq!(employee, "Emma");
                assert_eq!(shift, "");
            }
            other => panic!("expected InvalidShiftFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_stored_employee_serializes_id_as_underscore_id() {
        let stored = StoredEmployee::new(Employee::new("Olivia", "08:00 to 16:00"));
        let json = serde_json::to_value(&stored).unwrap();

        assert_eq!(json["_id"], stored.id.to_string());
        assert_eq!(json["name"], "Olivia");
        assert_eq!(json["shift"], "08:00 to 16:00");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_stored_employee_round_trips_to_employee() {
        let employee = Employee::new("Daniel", "16:00 to 24:00");
        let stored = StoredEmployee::new(employee.clone());

        assert_eq!(stored.employee(), employee);
        assert_eq!(stored.created_at, stored.updated_at);
    }

    #[test]
    fn test_new_records_get_distinct_ids() {
        let a = StoredEmployee::new(Employee::new("A", "00:00 to 08:00"));
        let b = StoredEmployee::new(Employee::new("A", "00:00 to 08:00"));
        assert_ne!(a.id, b.id);
    }
}
