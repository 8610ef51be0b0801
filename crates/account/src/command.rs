//! Intent objects accepted by the account aggregate.
//!
//! Commands carry only the new values a mutation needs and do no validation of
//! their own: invariant checking happens when the aggregate applies them, so a
//! partially-invalid intent can still be constructed, logged and inspected
//! before being rejected at the point of effect.

use serde::{Deserialize, Serialize};

use crate::person::{Address, Document, Email, Name};

/// Request to replace the account holder's name and billing address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeProfile {
    pub name: Name,
    pub billing_address: Option<Address>,
}

/// Request to replace the account's email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEmail {
    pub email: Email,
}

/// Request to replace the account's identity document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeDocument {
    pub document: Document,
}

/// Closed set of mutations the account aggregate understands.
///
/// Marked non-exhaustive so external dispatchers keep a wildcard arm; the
/// sanctioned error for that arm is `DomainError::unsupported_command`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AccountCommand {
    ChangeProfile(ChangeProfile),
    ChangeEmail(ChangeEmail),
    ChangeDocument(ChangeDocument),
}
