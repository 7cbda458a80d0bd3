//! Typed async client for the Stripe payments HTTP API.
//!
//! Translates domain operations (payment intents, refunds, checkout
//! sessions, subscriptions, billing portal sessions) into authenticated
//! form-encoded HTTP requests and translates responses back into typed
//! results or typed errors.
//!
//! Every operation is a replaceable slot on [`Client`], so tests can swap in
//! deterministic stand-ins ([`Client::mock`]) or drive the real pipeline
//! through a stub [`Transport`] with no network access.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use stripekit::{Client, Metadata, Money, SecretKey};
//!
//! #[tokio::main]
//! async fn main() -> stripekit::Result<()> {
//!     let client = Client::live();
//!     let key = SecretKey::new(std::env::var("STRIPE_SECRET_KEY").unwrap());
//!
//!     let intent = (client.create_payment_intent)(
//!         Money::usd(500),
//!         Metadata::new(),
//!         key,
//!     )
//!     .await?;
//!     println!("created {}", intent.id);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod checkout;
pub mod client;
pub mod decode;
pub mod error;
pub mod params;
pub mod payment;
pub mod portal;
pub mod refund;
pub mod subscription;
pub mod transport;

pub use auth::SecretKey;
pub use checkout::{CheckoutMode, CheckoutSession, CreateCheckoutSessionRequest, LineItem};
pub use client::Client;
pub use error::{ApiError, Error, Result};
pub use payment::{Currency, Metadata, Money, PaymentIntent};
pub use portal::BillingPortalSession;
pub use refund::Refund;
pub use subscription::{Subscription, SubscriptionStatus};
pub use transport::{
    HttpConfig, HttpTransport, Transport, TransportError, TransportRequest, TransportResponse,
};
