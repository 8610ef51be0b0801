//! Identity provider boundary.
//!
//! This crate never implements the gateway; it only owns the contract. A
//! publisher consuming [`AccountCreated`](crate::event::AccountCreated) events
//! provisions the matching user through an implementation of this trait, and
//! failure handling (retry, compensation) is that publisher's responsibility.

use subscription_core::{AccountId, DomainResult, GroupId, UserId};

use crate::person::{Email, Name};

/// User data handed to the identity provider for provisioning.
///
/// Built from the denormalized snapshot an `AccountCreated` event carries;
/// `account_id` is the link back to the aggregate the provisioned user
/// belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    account_id: AccountId,
    name: Name,
    email: Email,
}

impl User {
    pub fn new(account_id: AccountId, name: Name, email: Email) -> Self {
        Self {
            account_id,
            name,
            email,
        }
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

/// External identity provider operations this domain depends on.
///
/// `create` fails with `DomainError::Provisioning` and the membership calls
/// with `DomainError::Membership` when the external system rejects the
/// request; this domain neither catches nor retries those errors.
pub trait IdentityProviderGateway: Send + Sync {
    /// Provision a user, returning the provider-assigned id.
    fn create(&self, user: &User) -> DomainResult<UserId>;

    fn add_user_to_group(&self, user_id: &UserId, group_id: &GroupId) -> DomainResult<()>;

    fn remove_user_from_group(&self, user_id: &UserId, group_id: &GroupId) -> DomainResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use subscription_core::DomainError;

    /// Gateway double that rejects everything, the way a provider outage would.
    struct RejectingGateway;

    impl IdentityProviderGateway for RejectingGateway {
        fn create(&self, user: &User) -> DomainResult<UserId> {
            Err(DomainError::provisioning(format!(
                "user '{}' rejected",
                user.email().value()
            )))
        }

        fn add_user_to_group(&self, _: &UserId, group_id: &GroupId) -> DomainResult<()> {
            Err(DomainError::membership(format!(
                "group '{}' rejected the user",
                group_id.value()
            )))
        }

        fn remove_user_from_group(&self, _: &UserId, group_id: &GroupId) -> DomainResult<()> {
            Err(DomainError::membership(format!(
                "group '{}' rejected the removal",
                group_id.value()
            )))
        }
    }

    fn user() -> User {
        User::new(
            AccountId::new("ACC-123").unwrap(),
            Name::new("John", "Doe").unwrap(),
            Email::new("john@gmail.com").unwrap(),
        )
    }

    #[test]
    fn user_links_back_to_its_account() {
        let user = user();
        assert_eq!(user.account_id().value(), "ACC-123");
        assert_eq!(user.name().fullname(), "John Doe");
        assert_eq!(user.email().value(), "john@gmail.com");
    }

    #[test]
    fn provisioning_rejection_surfaces_as_provisioning_error() {
        let gateway = RejectingGateway;
        let err = gateway.create(&user()).unwrap_err();
        assert!(matches!(err, DomainError::Provisioning(_)));
    }

    #[test]
    fn membership_rejection_surfaces_as_membership_error() {
        let gateway = RejectingGateway;
        let user_id = UserId::new("USER-123").unwrap();
        let group_id = GroupId::new("GROUP-9").unwrap();

        let err = gateway.add_user_to_group(&user_id, &group_id).unwrap_err();
        assert!(matches!(err, DomainError::Membership(_)));

        let err = gateway
            .remove_user_from_group(&user_id, &group_id)
            .unwrap_err();
        assert!(matches!(err, DomainError::Membership(_)));
    }
}
