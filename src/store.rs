//! In-process employee store.
//!
//! Records are kept in a map keyed by identifier behind an async `RwLock`.
//! Reads go through [`EmployeeStore`] directly; writes that must check the
//! roster first (name uniqueness, capacity) go through an [`EmployeeWriter`]
//! so that the check and the write happen under the same lock.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::{RwLock, RwLockWriteGuard};
use uuid::Uuid;

use crate::models::{Employee, StoredEmployee};

type Records = HashMap<Uuid, StoredEmployee>;

/// Keyed collection of employee records.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    records: RwLock<Records>,
}

impl EmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every record, sorted by shift text and then by name.
    pub async fn list_sorted_by_shift(&self) -> Vec<StoredEmployee> {
        let records = self.records.read().await;
        let mut employees: Vec<StoredEmployee> = records.values().cloned().collect();
        employees.sort_by(|a, b| a.shift.cmp(&b.shift).then_with(|| a.name.cmp(&b.name)));
        employees
    }

    /// Returns the record with the given identifier.
    pub async fn get(&self, id: Uuid) -> Option<StoredEmployee> {
        self.records.read().await.get(&id).cloned()
    }

    /// Returns the record with the given name.
    pub async fn find_by_name(&self, name: &str) -> Option<StoredEmployee> {
        self.records
            .read()
            .await
            .values()
            .find(|record| record.name == name)
            .cloned()
    }

    /// Removes the record with the given identifier, returning it.
    pub async fn delete(&self, id: Uuid) -> Option<StoredEmployee> {
        self.records.write().await.remove(&id)
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Acquires exclusive access for a check-then-write sequence.
    pub async fn writer(&self) -> EmployeeWriter<'_> {
        EmployeeWriter {
            records: self.records.write().await,
        }
    }
}

/// Exclusive handle on the store's records.
pub struct EmployeeWriter<'a> {
    records: RwLockWriteGuard<'a, Records>,
}

impl EmployeeWriter<'_> {
    /// Whether the record exists.
    pub fn contains(&self, id: Uuid) -> bool {
        self.records.contains_key(&id)
    }

    /// Returns the record with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&StoredEmployee> {
        self.records.values().find(|record| record.name == name)
    }

    /// Roster entries for every record except `exclude`, in shift order.
    pub fn roster_excluding(&self, exclude: Option<Uuid>) -> Vec<Employee> {
        let mut records: Vec<&StoredEmployee> = self
            .records
            .values()
            .filter(|record| Some(record.id) != exclude)
            .collect();
        records.sort_by(|a, b| a.shift.cmp(&b.shift).then_with(|| a.name.cmp(&b.name)));
        records.into_iter().map(StoredEmployee::employee).collect()
    }

    /// Inserts a new record for the employee.
    pub fn insert(&mut self, employee: Employee) -> StoredEmployee {
        let record = StoredEmployee::new(employee);
        self.records.insert(record.id, record.clone());
        record
    }

    /// Replaces the name and shift of an existing record.
    ///
    /// Returns `None` if no record has the identifier.
    pub fn replace(&mut self, id: Uuid, employee: Employee) -> Option<StoredEmployee> {
        let record = self.records.get_mut(&id)?;
        record.name = employee.name;
        record.shift = employee.shift;
        record.updated_at = Utc::now();
        Some(record.clone())
    }
}
