//! Create-phase Seeder (spec §4.2).

use tracing::{debug, warn};

use crate::error::{ConflictError, OptimisticError};
use crate::schema::{Introspector, VersionedRecord};
use crate::value::Value;
use crate::version::{Clock, UlidGenerator, VersionValue};

/// Whether the insert this Seeder phase is attached to should be skipped
/// entirely (spec §4.2: "Dry-run and unscoped creates skip both phases").
pub trait InsertContext {
    fn is_dry_run(&self) -> bool;
    fn is_unscoped(&self) -> bool;
}

pub struct Seeder<'a> {
    introspector: &'a Introspector,
    clock: &'a dyn Clock,
    ulid: &'a UlidGenerator,
}

impl<'a> Seeder<'a> {
    pub fn new(introspector: &'a Introspector, clock: &'a dyn Clock, ulid: &'a UlidGenerator) -> Self {
        Self { introspector, clock, ulid }
    }

    /// Before-insert hook: seeds each model's version attribute, if it has one.
    pub fn before_insert(&self, ctx: &dyn InsertContext, models: &mut [&mut dyn VersionedRecord]) {
        if ctx.is_dry_run() || ctx.is_unscoped() {
            return;
        }
        for model in models.iter_mut() {
            let Some(version) = self.introspector.discover(model.schema()) else {
                continue;
            };
            let initial = version.kind.initial(self.clock, self.ulid);
            debug!(column = version.meta.column, "seeding initial version");
            model.set_field(version.meta.column, Value::from(initial));
        }
    }

    /// After-insert hook: verifies the seeded value actually persisted (spec
    /// §4.2: "this catches drivers that silently discard the seeded value").
    pub fn after_insert(
        &self,
        ctx: &dyn InsertContext,
        models: &[&dyn VersionedRecord],
    ) -> Result<(), OptimisticError> {
        if ctx.is_dry_run() || ctx.is_unscoped() {
            return Ok(());
        }
        for model in models {
            let Some(version) = self.introspector.discover(model.schema()) else {
                continue;
            };
            let Some(value) = model.get_field(version.meta.column) else {
                return Err(OptimisticError::SeedNotPersisted);
            };
            let Some(parsed) = VersionValue::from_value(version.kind, &value) else {
                return Err(OptimisticError::SeedNotPersisted);
            };
            let persisted = match parsed {
                VersionValue::Int64(n) => n == 1,
                other => !Value::from(other).is_zero(),
            };
            if !persisted {
                warn!(column = version.meta.column, "seeded version did not persist");
                return Err(ConflictError.into());
            }
        }
        Ok(())
    }
}
