//! Subscriptions.

use serde::Deserialize;

/// Subscription lifecycle state.
///
/// Transitions are owned entirely by the remote side; this client only
/// mirrors the reported state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Incomplete,
    IncompleteExpired,
    Trialing,
    Active,
    PastDue,
    Canceled,
    Unpaid,
}

impl SubscriptionStatus {
    /// The status value on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::IncompleteExpired => "incomplete_expired",
            Self::Trialing => "trialing",
            Self::Active => "active",
            Self::PastDue => "past_due",
            Self::Canceled => "canceled",
            Self::Unpaid => "unpaid",
        }
    }
}

/// A subscription as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subscription {
    /// Stripe subscription ID.
    pub id: String,
    /// Current lifecycle state.
    pub status: SubscriptionStatus,
    /// Stripe customer ID the subscription belongs to.
    pub customer: String,
}
