//! Request types for the roster API.
//!
//! This module defines the JSON request body shared by the create and update
//! endpoints.

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Request body for `POST /employees` and `PUT /employees/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's name.
    pub name: String,
    /// The shift text, e.g. `"00:00 to 08:00"`.
    pub shift: String,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee::new(req.name, req.shift)
    }
}
