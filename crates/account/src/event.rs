//! Facts recorded by the account aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use subscription_core::{DomainError, DomainEvent, DomainResult};

use crate::account::Account;

/// Fact: a brand-new account was instantiated.
///
/// Carries a denormalized snapshot (id, email, fullname) so a publisher can
/// provision the matching identity-provider user without reading the aggregate
/// back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCreated {
    account_id: String,
    email: String,
    fullname: String,
    occurred_on: DateTime<Utc>,
}

impl AccountCreated {
    /// Project the fact from a freshly constructed account, stamped "now".
    pub fn new(account: &Account) -> DomainResult<Self> {
        Self::with(
            account.id().value(),
            account.email().value(),
            account.name().fullname(),
            Some(Utc::now()),
        )
    }

    /// Raw constructor for reconstruction/deserialization.
    ///
    /// Applies the same validation as [`AccountCreated::new`] and never
    /// defaults `occurred_on`: a missing timestamp is an error, not "now".
    pub fn with(
        account_id: impl Into<String>,
        email: impl Into<String>,
        fullname: impl Into<String>,
        occurred_on: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        let account_id = account_id.into();
        let email = email.into();
        let fullname = fullname.into();

        if account_id.is_empty() {
            return Err(DomainError::empty_field("accountId"));
        }
        if email.is_empty() {
            return Err(DomainError::empty_field("email"));
        }
        if fullname.is_empty() {
            return Err(DomainError::empty_field("fullname"));
        }
        let occurred_on = occurred_on.ok_or_else(|| DomainError::null_field("occurredOn"))?;

        Ok(Self {
            account_id,
            email,
            fullname,
            occurred_on,
        })
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    pub fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }
}

/// Closed set of facts the account aggregate can record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountEvent {
    Created(AccountCreated),
}

impl DomainEvent for AccountEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AccountEvent::Created(_) => "subscription.account.created",
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            AccountEvent::Created(e) => e.account_id(),
        }
    }

    fn aggregate_type(&self) -> &'static str {
        "Account"
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        match self {
            AccountEvent::Created(e) => e.occurred_on(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::{Document, Email, Name};
    use subscription_core::{AccountId, UserId};

    fn valid_account() -> Account {
        Account::new_account(
            AccountId::new("13dsa").unwrap(),
            UserId::new("USER-123").unwrap(),
            Email::new("john@gmail.com").unwrap(),
            Name::new("John", "Doe").unwrap(),
            Document::create("12345678912", "cpf").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn projecting_from_account_snapshots_its_fields() {
        let account = valid_account();

        let event = AccountCreated::new(&account).unwrap();

        assert_eq!(event.account_id(), "13dsa");
        assert_eq!(event.email(), "john@gmail.com");
        assert_eq!(event.fullname(), "John Doe");

        let event = AccountEvent::Created(event);
        assert_eq!(event.aggregate_id(), "13dsa");
        assert_eq!(event.aggregate_type(), "Account");
        assert_eq!(event.event_type(), "subscription.account.created");
    }

    #[test]
    fn raw_constructor_rejects_empty_account_id() {
        let err =
            AccountCreated::with("", "john@gmail.com", "John", Some(Utc::now())).unwrap_err();
        assert_eq!(err.to_string(), "'accountId' should not be empty");
    }

    #[test]
    fn raw_constructor_rejects_empty_email() {
        let err = AccountCreated::with("123", "", "John", Some(Utc::now())).unwrap_err();
        assert_eq!(err.to_string(), "'email' should not be empty");
    }

    #[test]
    fn raw_constructor_rejects_empty_fullname() {
        let err =
            AccountCreated::with("123", "john@gmail.com", "", Some(Utc::now())).unwrap_err();
        assert_eq!(err.to_string(), "'fullname' should not be empty");
    }

    #[test]
    fn raw_constructor_rejects_missing_occurred_on() {
        let err = AccountCreated::with("123", "john@gmail.com", "John", None).unwrap_err();
        assert_eq!(err.to_string(), "'occurredOn' should not be null");
    }

    #[test]
    fn raw_constructor_never_overwrites_occurred_on() {
        let stamp = "2024-05-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();

        let event = AccountCreated::with("123", "john@gmail.com", "John", Some(stamp)).unwrap();

        assert_eq!(event.occurred_on(), stamp);
    }

    #[test]
    fn created_event_serializes_with_snapshot_fields() {
        let stamp = "2024-05-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let event = AccountCreated::with("123", "john@gmail.com", "John Doe", Some(stamp)).unwrap();

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["account_id"], "123");
        assert_eq!(json["email"], "john@gmail.com");
        assert_eq!(json["fullname"], "John Doe");

        let back: AccountCreated = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
