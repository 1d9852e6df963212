//! Initial roster seeding.
//!
//! Names are assigned shifts in rotation. Names that are already stored are
//! skipped and do not advance the rotation.

use tracing::{error, info, warn};

use crate::config::ServiceConfig;
use crate::error::RosterResult;
use crate::models::Employee;
use crate::service::RosterService;

/// Counts of what a seeding run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Employees created.
    pub inserted: usize,
    /// Names that were already stored.
    pub skipped: usize,
}

/// Seeds the roster with `names`, rotating through `shifts`.
///
/// Each new employee goes through [`RosterService::create`], so seeded shifts
/// are validated like any other write.
pub async fn seed_roster(
    service: &RosterService,
    names: &[String],
    shifts: &[String],
) -> RosterResult<SeedReport> {
    let mut report = SeedReport::default();
    if shifts.is_empty() {
        warn!("Seed roster has no shifts, skipping");
        return Ok(report);
    }

    let mut shift_index = 0;
    for name in names {
        if service.store().find_by_name(name).await.is_some() {
            info!(name = %name, "Employee already exists, not seeding");
            report.skipped += 1;
            continue;
        }

        let shift = &shifts[shift_index];
        service.create(Employee::new(name.clone(), shift.clone())).await?;
        info!(name = %name, shift = %shift, "Seeded employee");
        report.inserted += 1;
        shift_index = (shift_index + 1) % shifts.len();
    }

    Ok(report)
}

/// Applies the configured seed roster, if enabled.
///
/// A disabled seed returns an empty report. A failure is logged before it is
/// returned: under `validation_scope: roster` each seeded shift holds at most
/// `max_per_slot - 1` employees, so the default nine-name seed is rejected.
pub async fn seed_from_config(
    service: &RosterService,
    config: &ServiceConfig,
) -> RosterResult<SeedReport> {
    if !config.seed.enabled {
        return Ok(SeedReport::default());
    }

    seed_roster(service, &config.seed.names, &config.seed.shifts)
        .await
        .inspect_err(|err| {
            error!(
                error = %err,
                scope = ?config.validation_scope,
                max_per_slot = config.rules.max_per_slot,
                "Seed roster rejected; under validation_scope: roster each shift holds at most max_per_slot - 1 employees"
            );
        })
}
