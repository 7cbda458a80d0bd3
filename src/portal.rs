//! Billing portal sessions.
//!
//! A portal session is a remote-hosted flow letting a customer manage their
//! own subscription and billing details.

use serde::Deserialize;

/// A billing portal session as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BillingPortalSession {
    /// Stripe portal session ID.
    pub id: String,
    /// URL to redirect the customer to.
    pub url: String,
}
