//! Aggregate root trait and optimistic-concurrency vocabulary.

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::event::DomainEvent;

/// Aggregate root marker + minimal interface.
///
/// Aggregates accumulate the domain events they produce in memory; the pending
/// list is transient state, drained by a publisher after a successful commit,
/// and is never part of the persisted aggregate.
pub trait AggregateRoot: Entity {
    /// Event type this aggregate produces.
    type Event: DomainEvent;

    /// Version of the persisted state this instance was loaded at.
    ///
    /// Starts at 0 for brand-new aggregates. The aggregate never advances it;
    /// the persistence collaborator does, after each successful commit.
    fn version(&self) -> u64;

    /// Pending domain events, in the order they were recorded. Non-clearing.
    fn domain_events(&self) -> &[Self::Event];
}

/// Optimistic concurrency expectation for an aggregate write.
///
/// The persistence collaborator reads state at version V, applies commands to
/// an in-memory aggregate rehydrated at V, and persists at V+1 after checking
/// the stored version still matches. Conflicts fail the whole operation; no
/// retries happen at this layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpectedVersion {
    /// Skip version checking (idempotent commands, migrations, etc.).
    Any,
    /// Require the aggregate to be at an exact version.
    Exact(u64),
}

impl ExpectedVersion {
    pub fn matches(self, actual: u64) -> bool {
        match self {
            ExpectedVersion::Any => true,
            ExpectedVersion::Exact(v) => v == actual,
        }
    }

    pub fn check(self, actual: u64) -> DomainResult<()> {
        if self.matches(actual) {
            Ok(())
        } else {
            Err(DomainError::conflict(format!(
                "optimistic concurrency check failed (expected: {self:?}, actual: {actual})"
            )))
        }
    }
}
