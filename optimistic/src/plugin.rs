//! Plugin entry point (spec §6).

use crate::schema::Introspector;
use crate::seed::Seeder;
use crate::rewrite::Rewriter;
use crate::verify::Verifier;
use crate::version::{Clock, SystemClock, UlidGenerator};

/// Configuration accepted by [`OptimisticLock::new`] (spec §6).
#[derive(Clone)]
pub struct OptimisticLockConfig {
    /// Tag setting the Introspector recognizes. Defaults to `"version"`.
    pub tag_keyword: String,
    /// Forces the Verifier into the two-round-trip fallback path even on
    /// dialects that support `RETURNING`.
    pub disable_returning: bool,
}

impl Default for OptimisticLockConfig {
    fn default() -> Self {
        Self { tag_keyword: "version".to_string(), disable_returning: false }
    }
}

/// The plugin handle, holding the long-lived pieces (introspector, clock,
/// entropy source) that every hook invocation needs.
pub struct OptimisticLock {
    config: OptimisticLockConfig,
    introspector: Introspector,
    clock: Box<dyn Clock>,
    ulid: UlidGenerator,
}

impl OptimisticLock {
    pub fn new(config: OptimisticLockConfig) -> Self {
        let introspector = Introspector::new(config.tag_keyword.clone());
        Self { config, introspector, clock: Box::new(SystemClock), ulid: UlidGenerator::new() }
    }

    /// Overrides the clock used for timestamp-typed versions (dependency
    /// injection for tests and for hosts with their own time source).
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &OptimisticLockConfig {
        &self.config
    }

    pub fn seeder(&self) -> Seeder<'_> {
        Seeder::new(&self.introspector, self.clock.as_ref(), &self.ulid)
    }

    pub fn rewriter(&self) -> Rewriter<'_> {
        Rewriter::new(&self.introspector, self.clock.as_ref(), &self.ulid)
            .with_disable_returning(self.config.disable_returning)
    }

    pub fn verifier(&self) -> Verifier<'_> {
        Verifier::new(&self.introspector)
    }
}

impl Default for OptimisticLock {
    fn default() -> Self {
        Self::new(OptimisticLockConfig::default())
    }
}
