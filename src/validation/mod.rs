//! Shift validation for the roster service.
//!
//! The validator is a pure function over a roster snapshot. It never reads
//! the store; callers decide which employees make up the roster.

mod shift_rules;

pub use shift_rules::{
    DEFAULT_MAX_PER_SLOT, DEFAULT_PERMITTED_START_HOURS, SHIFTS_VALID_MESSAGE, ShiftRules,
    Verdict, validate_shifts,
};
