//! Strongly-typed identifiers used across the domain.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Scalar types usable as identifier values.
pub trait IdentifierValue: Clone + Eq + core::hash::Hash + fmt::Debug {
    /// Whether the value counts as empty for validation purposes.
    fn is_empty_value(&self) -> bool;
}

impl IdentifierValue for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// Validated single-value identity wrapper.
///
/// Equality and hashing are by wrapped value; the wrapped value is never empty.
/// Domain identifiers are distinct nominal newtypes over this wrapper so ids of
/// different kinds cannot be interchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier<T>(T);

impl<T: IdentifierValue> Identifier<T> {
    /// Wrap `value`, rejecting empty values with a field-specific message.
    pub fn new(value: T, field: &str) -> DomainResult<Self> {
        if value.is_empty_value() {
            return Err(DomainError::empty_field(field));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &T {
        &self.0
    }

    pub fn into_value(self) -> T {
        self.0
    }
}

impl Identifier<String> {
    /// Generate a fresh identifier value.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing values explicitly in tests
    /// for determinism.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }
}

/// Identifier of a subscription account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(Identifier<String>);

/// Identifier of the identity-provider-managed user linked to an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Identifier<String>);

/// Identifier of an identity-provider group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupId(Identifier<String>);

/// Identifier of a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubscriptionId(Identifier<String>);

macro_rules! impl_string_id {
    ($t:ident, $field:literal) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                Ok(Self(Identifier::new(value.into(), $field)?))
            }

            /// Mint a fresh identifier (UUIDv7 string).
            pub fn unique() -> Self {
                Self(Identifier::generate())
            }

            pub fn value(&self) -> &str {
                self.0.value()
            }
        }

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.value())
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(id: $t) -> Self {
                id.0.into_value()
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_string_id!(AccountId, "accountId");
impl_string_id!(UserId, "userId");
impl_string_id!(GroupId, "groupId");
impl_string_id!(SubscriptionId, "subscriptionId");

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identifier_rejects_empty_value() {
        let err = Identifier::new(String::new(), "accountId").unwrap_err();
        assert_eq!(err.to_string(), "'accountId' should not be empty");
    }

    #[test]
    fn nominal_ids_carry_their_own_field_name() {
        assert_eq!(
            AccountId::new("").unwrap_err().to_string(),
            "'accountId' should not be empty"
        );
        assert_eq!(
            UserId::new("").unwrap_err().to_string(),
            "'userId' should not be empty"
        );
        assert_eq!(
            GroupId::new("").unwrap_err().to_string(),
            "'groupId' should not be empty"
        );
        assert_eq!(
            SubscriptionId::new("").unwrap_err().to_string(),
            "'subscriptionId' should not be empty"
        );
    }

    #[test]
    fn equality_and_hash_are_value_based() {
        use std::collections::HashSet;

        let a = AccountId::new("ACC-123").unwrap();
        let b = AccountId::new("ACC-123").unwrap();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn unique_generates_non_empty_distinct_values() {
        let a = AccountId::unique();
        let b = AccountId::unique();
        assert!(!a.value().is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn parses_from_str_and_displays_value() {
        let id: SubscriptionId = "SUB-42".parse().unwrap();
        assert_eq!(id.value(), "SUB-42");
        assert_eq!(id.to_string(), "SUB-42");
    }

    proptest! {
        #[test]
        fn any_non_empty_string_round_trips(value in ".+") {
            let id = AccountId::new(value.clone()).unwrap();
            prop_assert_eq!(id.value(), value.as_str());
        }
    }
}
