use chrono::{DateTime, Utc};

/// An immutable record of a fact that occurred to an aggregate.
///
/// Events carry a denormalized snapshot of whatever downstream consumers need
/// (e.g. an identity provider provisioning a user from a creation event), so
/// consumers never have to read the aggregate back.
pub trait DomainEvent: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name (e.g. "subscription.account.created").
    fn event_type(&self) -> &'static str;

    /// Id of the aggregate the fact happened to.
    fn aggregate_id(&self) -> &str;

    /// Kind of aggregate the fact happened to (e.g. "Account").
    fn aggregate_type(&self) -> &'static str;

    /// When the fact occurred (business time).
    fn occurred_on(&self) -> DateTime<Utc>;
}
