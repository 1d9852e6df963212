//! Core data models for the shift roster service.
//!
//! This module contains the domain models used throughout the service.

mod employee;
mod shift;

pub use employee::{Employee, StoredEmployee};
pub use shift::ShiftStart;
