//! Refunds.

use serde::Deserialize;

/// A refund issued against a payment intent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Refund {
    /// Stripe refund ID.
    pub id: String,
}
