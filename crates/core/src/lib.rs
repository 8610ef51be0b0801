//! `subscription-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! validated identifiers, the entity/aggregate-root seams, the domain-event
//! contract, and the shared error model.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod event;
pub mod id;
pub mod value_object;

pub use aggregate::{AggregateRoot, ExpectedVersion};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use event::DomainEvent;
pub use id::{AccountId, GroupId, Identifier, SubscriptionId, UserId};
pub use value_object::ValueObject;
