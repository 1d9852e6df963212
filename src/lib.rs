//! Shift roster service for coffee-shop employee scheduling.
//!
//! This crate provides the shift validation rules, an in-process employee
//! store, the roster service that ties them together, and the HTTP API that
//! exposes CRUD endpoints over the roster.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod service;
pub mod store;
pub mod validation;
