//! Account bounded context (subscription-service accounts, event-sourced).
//!
//! This crate contains business rules for accounts, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). Persistence,
//! event publishing and the identity-provider client are collaborators that
//! consume the contracts exposed here.

pub mod account;
pub mod command;
pub mod event;
pub mod idp;
pub mod person;

pub use account::Account;
pub use command::{AccountCommand, ChangeDocument, ChangeEmail, ChangeProfile};
pub use event::{AccountCreated, AccountEvent};
pub use idp::{IdentityProviderGateway, User};
pub use person::{Address, Document, Email, Name};
