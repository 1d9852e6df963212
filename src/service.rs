//! Roster operations.
//!
//! [`RosterService`] implements the create/read/update/delete contract of the
//! API on top of an [`EmployeeStore`]: name uniqueness, shift validation, and
//! existence checks. It knows nothing about HTTP.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ValidationScope;
use crate::error::{RosterError, RosterResult};
use crate::models::{Employee, StoredEmployee};
use crate::store::{EmployeeStore, EmployeeWriter};
use crate::validation::ShiftRules;

/// CRUD operations over the employee roster.
#[derive(Debug, Clone)]
pub struct RosterService {
    store: Arc<EmployeeStore>,
    rules: ShiftRules,
    scope: ValidationScope,
}

impl RosterService {
    /// Creates a service over the given store.
    pub fn new(store: Arc<EmployeeStore>, rules: ShiftRules, scope: ValidationScope) -> Self {
        Self {
            store,
            rules,
            scope,
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }

    /// Lists every employee, sorted by shift text.
    pub async fn list(&self) -> Vec<StoredEmployee> {
        self.store.list_sorted_by_shift().await
    }

    /// Fetches one employee.
    ///
    /// # Errors
    ///
    /// [`RosterError::EmployeeNotFound`] if the identifier is unknown or is
    /// not a valid identifier.
    pub async fn get(&self, id: &str) -> RosterResult<StoredEmployee> {
        let uuid = parse_id(id)?;
        self.store
            .get(uuid)
            .await
            .ok_or_else(|| not_found(id))
    }

    /// Adds a new employee.
    ///
    /// # Errors
    ///
    /// - [`RosterError::DuplicateName`] if the name is already stored
    /// - [`RosterError::InvalidShiftFormat`] if the shift text is malformed
    /// - [`RosterError::ShiftRejected`] if the shift fails validation
    pub async fn create(&self, employee: Employee) -> RosterResult<StoredEmployee> {
        let mut writer = self.store.writer().await;

        if writer.find_by_name(&employee.name).is_some() {
            return Err(RosterError::DuplicateName {
                name: employee.name,
            });
        }

        self.check(&writer, None, &employee)?;

        let record = writer.insert(employee);
        info!(id = %record.id, name = %record.name, shift = %record.shift, "Employee added");
        Ok(record)
    }

    /// Replaces the name and shift of an existing employee.
    ///
    /// # Errors
    ///
    /// - [`RosterError::EmployeeNotFound`] if the identifier is unknown
    /// - [`RosterError::DuplicateName`] if another employee has the new name
    /// - [`RosterError::InvalidShiftFormat`] if the shift text is malformed
    /// - [`RosterError::ShiftRejected`] if the shift fails validation
    pub async fn update(&self, id: &str, employee: Employee) -> RosterResult<StoredEmployee> {
        let uuid = parse_id(id)?;
        let mut writer = self.store.writer().await;

        if !writer.contains(uuid) {
            return Err(not_found(id));
        }

        if writer
            .find_by_name(&employee.name)
            .is_some_and(|other| other.id != uuid)
        {
            return Err(RosterError::DuplicateName {
                name: employee.name,
            });
        }

        self.check(&writer, Some(uuid), &employee)?;

        let record = writer.replace(uuid, employee).ok_or_else(|| not_found(id))?;
        info!(id = %record.id, name = %record.name, shift = %record.shift, "Employee updated");
        Ok(record)
    }

    /// Removes an employee.
    ///
    /// # Errors
    ///
    /// [`RosterError::EmployeeNotFound`] if nothing was removed.
    pub async fn delete(&self, id: &str) -> RosterResult<StoredEmployee> {
        let uuid = parse_id(id)?;
        let record = self.store.delete(uuid).await.ok_or_else(|| not_found(id))?;
        info!(id = %record.id, name = %record.name, "Employee deleted");
        Ok(record)
    }

    /// Runs the validator over the roster selected by the validation scope.
    fn check(
        &self,
        writer: &EmployeeWriter<'_>,
        replacing: Option<Uuid>,
        candidate: &Employee,
    ) -> RosterResult<()> {
        let roster = match self.scope {
            ValidationScope::Candidate => vec![candidate.clone()],
            ValidationScope::Roster => {
                let mut roster = writer.roster_excluding(replacing);
                roster.push(candidate.clone());
                roster
            }
        };

        let verdict = self.rules.validate(&roster)?;
        debug!(
            scope = ?self.scope,
            roster_size = roster.len(),
            ok = verdict.ok,
            message = %verdict.message,
            "Validated roster"
        );
        verdict.into_result()
    }
}

fn parse_id(id: &str) -> RosterResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| not_found(id))
}

fn not_found(id: &str) -> RosterError {
    RosterError::EmployeeNotFound { id: id.to_string() }
}
