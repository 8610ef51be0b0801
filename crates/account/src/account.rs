//! The account aggregate root.

use tracing::debug;

use subscription_core::{
    AccountId, AggregateRoot, DomainError, DomainEvent, DomainResult, Entity, UserId,
};

use crate::command::{AccountCommand, ChangeDocument, ChangeEmail, ChangeProfile};
use crate::event::{AccountCreated, AccountEvent};
use crate::person::{Address, Document, Email, Name};

/// A subscription-service account.
///
/// There are exactly two ways to obtain one: [`Account::new_account`] for a
/// brand-new aggregate (records its creation as a domain event) and
/// [`Account::with`] for rehydrating previously persisted state (records
/// nothing). Mutation goes through [`Account::execute`].
///
/// The pending-event list is transient, in-memory state: it is not part of the
/// persisted aggregate and is drained by the publishing collaborator after a
/// successful commit.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    version: u64,
    user_id: UserId,
    name: Name,
    email: Email,
    document: Document,
    billing_address: Option<Address>,
    domain_events: Vec<AccountEvent>,
}

impl Account {
    /// Create a brand-new account at version 0 with no billing address.
    ///
    /// This is the only path that produces a domain event: exactly one
    /// [`AccountCreated`] is recorded for the publisher to dispatch.
    pub fn new_account(
        id: AccountId,
        user_id: UserId,
        email: Email,
        name: Name,
        document: Document,
    ) -> DomainResult<Self> {
        let mut account = Self {
            id,
            version: 0,
            user_id,
            name,
            email,
            document,
            billing_address: None,
            domain_events: Vec::new(),
        };
        let created = AccountCreated::new(&account)?;
        account.record(AccountEvent::Created(created));
        Ok(account)
    }

    /// Rehydrate an account from persisted state.
    ///
    /// Fields arrive as `Option` because a persistence row may be missing any
    /// of them; every required field yields its own "'<field>' should not be
    /// null" validation error, while `billing_address` may legitimately be
    /// absent. Restoring known-good prior state records no domain events.
    pub fn with(
        id: Option<AccountId>,
        version: u64,
        user_id: Option<UserId>,
        email: Option<Email>,
        name: Option<Name>,
        document: Option<Document>,
        billing_address: Option<Address>,
    ) -> DomainResult<Self> {
        let id = id.ok_or_else(|| DomainError::null_field("id"))?;
        let user_id = user_id.ok_or_else(|| DomainError::null_field("userId"))?;
        let name = name.ok_or_else(|| DomainError::null_field("name"))?;
        let email = email.ok_or_else(|| DomainError::null_field("email"))?;
        let document = document.ok_or_else(|| DomainError::null_field("document"))?;

        Ok(Self {
            id,
            version,
            user_id,
            name,
            email,
            document,
            billing_address,
            domain_events: Vec::new(),
        })
    }

    /// Apply one command, mutating state in place.
    ///
    /// No command appends a domain event or advances `version`; the version is
    /// the persistence collaborator's to advance after a successful write.
    pub fn execute(&mut self, command: AccountCommand) -> DomainResult<()> {
        debug!(account_id = %self.id, command = ?command, "executing account command");
        match command {
            AccountCommand::ChangeProfile(cmd) => self.change_profile(cmd),
            AccountCommand::ChangeEmail(cmd) => self.change_email(cmd),
            AccountCommand::ChangeDocument(cmd) => self.change_document(cmd),
        }
        Ok(())
    }

    fn change_profile(&mut self, cmd: ChangeProfile) {
        self.name = cmd.name;
        self.billing_address = cmd.billing_address;
    }

    fn change_email(&mut self, cmd: ChangeEmail) {
        self.email = cmd.email;
    }

    fn change_document(&mut self, cmd: ChangeDocument) {
        self.document = cmd.document;
    }

    fn record(&mut self, event: AccountEvent) {
        debug!(
            account_id = %self.id,
            event_type = event.event_type(),
            "recording domain event"
        );
        self.domain_events.push(event);
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn billing_address(&self) -> Option<&Address> {
        self.billing_address.as_ref()
    }

    /// Pending domain events, in recording order. Does not clear them.
    pub fn domain_events(&self) -> &[AccountEvent] {
        &self.domain_events
    }

    /// Drain the pending events once the publisher has dispatched them durably.
    pub fn take_domain_events(&mut self) -> Vec<AccountEvent> {
        core::mem::take(&mut self.domain_events)
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &AccountId {
        &self.id
    }
}

impl AggregateRoot for Account {
    type Event = AccountEvent;

    fn version(&self) -> u64 {
        self.version
    }

    fn domain_events(&self) -> &[AccountEvent] {
        &self.domain_events
    }
}

/// Aggregates compare by identity: same id, same account.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Account {}
