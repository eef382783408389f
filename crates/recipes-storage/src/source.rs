//! Sources of identifiers and timestamps consumed by the store.
//!
//! Both are traits so tests can swap in deterministic implementations.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use recipes_core::RecipeId;

/// Produces identifiers for newly created recipes.
///
/// Implementations must be safe to call from several threads at once.
pub trait IdSource: Send + Sync + fmt::Debug {
    fn next_id(&self) -> RecipeId;
}

/// Random UUID v4 identifiers. The default source.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&self) -> RecipeId {
        RecipeId::generate()
    }
}

/// Deterministic `prefix-N` identifiers backed by an atomic counter.
#[derive(Debug)]
pub struct SequentialIdSource {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIdSource {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> RecipeId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        RecipeId(format!("{}-{}", self.prefix, n))
    }
}

/// Supplies the current instant for `publishedAt`.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time. The default clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
