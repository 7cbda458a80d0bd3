//! Payment intents and money values.

use std::collections::HashMap;
use std::fmt;

use secrecy::SecretString;
use serde::Deserialize;

/// Supported settlement currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    /// United States dollar.
    Usd,
}

impl Currency {
    /// The currency code on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An amount of money in minor currency units (cents for USD).
///
/// Stored as an unsigned integer: financial amounts are never negative and
/// never touch floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    /// Amount in minor units.
    pub amount: u64,
    /// Settlement currency.
    pub currency: Currency,
}

impl Money {
    /// Create an amount in the given currency.
    #[must_use]
    pub fn new(amount: u64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a USD amount from cents.
    #[must_use]
    pub fn usd(cents: u64) -> Self {
        Self::new(cents, Currency::Usd)
    }
}

/// Key/value metadata attached to a payment intent.
///
/// Keys must be non-empty; iteration order is unspecified and the wire
/// encoding makes no ordering promise across entries.
pub type Metadata = HashMap<String, String>;

/// A remote-tracked attempt to collect payment from a customer.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    /// Stripe payment intent ID.
    pub id: String,
    /// Secret handed to the downstream payment UI.
    ///
    /// Held as a [`SecretString`] so it cannot leak through `Debug` output
    /// or logs.
    pub client_secret: SecretString,
}
