//! Checkout sessions.
//!
//! A checkout session is a remote-hosted, short-lived flow for completing a
//! purchase. This module holds the request record the caller builds and the
//! session record decoded from responses.

use serde::Deserialize;

/// What the checkout session collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutMode {
    /// One-time payment.
    Payment,
    /// Save payment details for later use.
    Setup,
    /// Start a subscription.
    Subscription,
}

impl CheckoutMode {
    /// The mode value on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Setup => "setup",
            Self::Subscription => "subscription",
        }
    }
}

/// One purchasable line in a checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Number of units; must be positive.
    pub quantity: u64,
    /// Stripe price ID.
    pub price_id: String,
}

impl LineItem {
    /// Create a line item.
    #[must_use]
    pub fn new(quantity: u64, price_id: impl Into<String>) -> Self {
        Self {
            quantity,
            price_id: price_id.into(),
        }
    }
}

/// Request to create a checkout session.
///
/// Optional fields that are `None` contribute nothing to the wire encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCheckoutSessionRequest {
    /// Where the customer lands after completing the flow.
    pub success_url: String,
    /// Where the customer lands after abandoning the flow.
    pub cancel_url: String,
    /// Purchase contents; order is preserved into the wire encoding.
    pub line_items: Vec<LineItem>,
    /// What the session collects.
    pub mode: CheckoutMode,
    /// Caller-supplied reference echoed back on the session.
    pub client_reference_id: Option<String>,
    /// Pre-filled customer email.
    pub customer_email: Option<String>,
    /// Trial length in days for subscription mode; must be positive.
    pub trial_period_days: Option<u32>,
}

/// A checkout session as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckoutSession {
    /// Stripe checkout session ID.
    pub id: String,
    /// Hosted URL to redirect the customer to, when available.
    #[serde(default)]
    pub url: Option<String>,
    /// Subscription created by the session, if any.
    #[serde(default)]
    pub subscription: Option<String>,
    /// Echo of the request's reference; never invented by the client.
    #[serde(default)]
    pub client_reference_id: Option<String>,
}
