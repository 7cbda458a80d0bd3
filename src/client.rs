//! The client facade.
//!
//! [`Client`] bundles the seven operations as independently replaceable
//! function-valued slots. [`Client::live`] binds every slot to the real
//! implementation in [`crate::api`]; [`Client::mock`] binds every slot to a
//! fixed literal result with no transport and no I/O, for tests that never
//! touch the network. Any subset of slots can be substituted after
//! construction. Building a client performs no I/O and cannot fail.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripekit::{Client, Money, SecretKey};
//!
//! let client = Client::live();
//! let key = SecretKey::new(std::env::var("STRIPE_SECRET_KEY")?);
//! let intent = (client.create_payment_intent)(
//!     Money::usd(500),
//!     Default::default(),
//!     key,
//! ).await?;
//! ```

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use secrecy::SecretString;

use crate::api;
use crate::auth::SecretKey;
use crate::checkout::{CheckoutSession, CreateCheckoutSessionRequest};
use crate::error::Result;
use crate::payment::{Metadata, Money, PaymentIntent};
use crate::portal::BillingPortalSession;
use crate::refund::Refund;
use crate::subscription::{Subscription, SubscriptionStatus};
use crate::transport::{HttpTransport, Transport};

/// Future returned by a client operation slot.
pub type OpFuture<T> = BoxFuture<'static, Result<T>>;

/// Slot: create a payment intent from an amount and metadata.
pub type CreatePaymentIntentFn =
    Arc<dyn Fn(Money, Metadata, SecretKey) -> OpFuture<PaymentIntent> + Send + Sync>;
/// Slot: cancel a payment intent by ID.
pub type CancelPaymentIntentFn =
    Arc<dyn Fn(String, SecretKey) -> OpFuture<PaymentIntent> + Send + Sync>;
/// Slot: refund a payment intent by ID.
pub type CreateRefundFn = Arc<dyn Fn(String, SecretKey) -> OpFuture<Refund> + Send + Sync>;
/// Slot: retrieve a checkout session by ID.
pub type GetCheckoutSessionFn =
    Arc<dyn Fn(String, SecretKey) -> OpFuture<CheckoutSession> + Send + Sync>;
/// Slot: create a checkout session.
pub type CreateCheckoutSessionFn = Arc<
    dyn Fn(CreateCheckoutSessionRequest, SecretKey) -> OpFuture<CheckoutSession> + Send + Sync,
>;
/// Slot: retrieve a subscription by ID.
pub type GetSubscriptionFn =
    Arc<dyn Fn(String, SecretKey) -> OpFuture<Subscription> + Send + Sync>;
/// Slot: create a billing portal session for a customer.
pub type CreateBillingPortalSessionFn =
    Arc<dyn Fn(String, SecretKey) -> OpFuture<BillingPortalSession> + Send + Sync>;

/// Bundle of payment operations with independently replaceable slots.
///
/// There is no implicit global default: a client is always constructed with
/// every slot fixed at once, via [`Client::live`], [`Client::with_transport`],
/// or [`Client::mock`]. Slots are invoked as function fields:
/// `(client.get_subscription)(id, key).await`.
#[derive(Clone)]
pub struct Client {
    /// `POST /v1/payment_intents`
    pub create_payment_intent: CreatePaymentIntentFn,
    /// `POST /v1/payment_intents/{id}/cancel`
    pub cancel_payment_intent: CancelPaymentIntentFn,
    /// `POST /v1/refunds`
    pub create_refund: CreateRefundFn,
    /// `GET /v1/checkout/sessions/{id}`
    pub get_checkout_session: GetCheckoutSessionFn,
    /// `POST /v1/checkout/sessions`
    pub create_checkout_session: CreateCheckoutSessionFn,
    /// `GET /v1/subscriptions/{id}`
    pub get_subscription: GetSubscriptionFn,
    /// `POST /v1/billing_portal/sessions`
    pub create_billing_portal_session: CreateBillingPortalSessionFn,
}

impl Client {
    /// Client bound to the real API over the default HTTPS transport.
    #[must_use]
    pub fn live() -> Self {
        Self::with_transport(HttpTransport::new())
    }

    /// Client bound to the real API over a caller-supplied transport.
    #[must_use]
    pub fn with_transport<T>(transport: T) -> Self
    where
        T: Transport + 'static,
    {
        let transport = Arc::new(transport);
        Self {
            create_payment_intent: {
                let transport = transport.clone();
                Arc::new(move |money, metadata, key| {
                    let transport = transport.clone();
                    Box::pin(async move {
                        api::create_payment_intent(transport.as_ref(), money, &metadata, &key)
                            .await
                    })
                })
            },
            cancel_payment_intent: {
                let transport = transport.clone();
                Arc::new(move |id, key| {
                    let transport = transport.clone();
                    Box::pin(async move {
                        api::cancel_payment_intent(transport.as_ref(), &id, &key).await
                    })
                })
            },
            create_refund: {
                let transport = transport.clone();
                Arc::new(move |payment_intent_id, key| {
                    let transport = transport.clone();
                    Box::pin(async move {
                        api::create_refund(transport.as_ref(), &payment_intent_id, &key).await
                    })
                })
            },
            get_checkout_session: {
                let transport = transport.clone();
                Arc::new(move |id, key| {
                    let transport = transport.clone();
                    Box::pin(async move {
                        api::get_checkout_session(transport.as_ref(), &id, &key).await
                    })
                })
            },
            create_checkout_session: {
                let transport = transport.clone();
                Arc::new(move |request, key| {
                    let transport = transport.clone();
                    Box::pin(async move {
                        api::create_checkout_session(transport.as_ref(), &request, &key).await
                    })
                })
            },
            get_subscription: {
                let transport = transport.clone();
                Arc::new(move |id, key| {
                    let transport = transport.clone();
                    Box::pin(
                        async move { api::get_subscription(transport.as_ref(), &id, &key).await },
                    )
                })
            },
            create_billing_portal_session: {
                let transport = transport.clone();
                Arc::new(move |customer_id, key| {
                    let transport = transport.clone();
                    Box::pin(async move {
                        api::create_billing_portal_session(transport.as_ref(), &customer_id, &key)
                            .await
                    })
                })
            },
        }
    }

    /// Client whose every slot returns a fixed literal result instantly.
    ///
    /// No slot touches a transport, so mock clients are usable in tests with
    /// no network access and no credentials.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            create_payment_intent: Arc::new(|_, _, _| {
                Box::pin(async { Ok(mock_payment_intent()) })
            }),
            cancel_payment_intent: Arc::new(|_, _| {
                Box::pin(async { Ok(mock_payment_intent()) })
            }),
            create_refund: Arc::new(|_, _| {
                Box::pin(async {
                    Ok(Refund {
                        id: "re_mock_id".to_string(),
                    })
                })
            }),
            get_checkout_session: Arc::new(|_, _| {
                Box::pin(async {
                    Ok(CheckoutSession {
                        id: "cs_123".to_string(),
                        url: None,
                        subscription: Some("sub_123".to_string()),
                        client_reference_id: None,
                    })
                })
            }),
            create_checkout_session: Arc::new(|_, _| {
                Box::pin(async {
                    Ok(CheckoutSession {
                        id: "cs_123".to_string(),
                        url: Some("/checkout.session/url".to_string()),
                        subscription: None,
                        client_reference_id: None,
                    })
                })
            }),
            get_subscription: Arc::new(|_, _| {
                Box::pin(async {
                    Ok(Subscription {
                        id: "sub_123".to_string(),
                        status: SubscriptionStatus::Trialing,
                        customer: "cus_123".to_string(),
                    })
                })
            }),
            create_billing_portal_session: Arc::new(|_, _| {
                Box::pin(async {
                    Ok(BillingPortalSession {
                        id: "bps_123".to_string(),
                        url: "/billing_portal.session/url".to_string(),
                    })
                })
            }),
        }
    }
}

fn mock_payment_intent() -> PaymentIntent {
    PaymentIntent {
        id: "pi_mock_id".to_string(),
        client_secret: SecretString::new("pi_mock_secret".to_string()),
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn key() -> SecretKey {
        SecretKey::new("sk_test_unused")
    }

    #[tokio::test]
    async fn test_mock_create_payment_intent_ignores_inputs() {
        let client = Client::mock();
        let intent = (client.create_payment_intent)(Money::usd(500), Metadata::new(), key())
            .await
            .unwrap();
        assert_eq!(intent.id, "pi_mock_id");
        assert_eq!(intent.client_secret.expose_secret(), "pi_mock_secret");

        let mut metadata = Metadata::new();
        metadata.insert("order".to_string(), "42".to_string());
        let intent = (client.create_payment_intent)(Money::usd(999_999), metadata, key())
            .await
            .unwrap();
        assert_eq!(intent.id, "pi_mock_id");
    }

    #[tokio::test]
    async fn test_mock_cancel_payment_intent() {
        let client = Client::mock();
        let intent = (client.cancel_payment_intent)("pi_anything".to_string(), key())
            .await
            .unwrap();
        assert_eq!(intent.id, "pi_mock_id");
    }

    #[tokio::test]
    async fn test_mock_refund() {
        let client = Client::mock();
        let refund = (client.create_refund)("pi_anything".to_string(), key())
            .await
            .unwrap();
        assert_eq!(refund.id, "re_mock_id");
    }

    #[tokio::test]
    async fn test_mock_checkout_sessions() {
        let client = Client::mock();

        let fetched = (client.get_checkout_session)("anything".to_string(), key())
            .await
            .unwrap();
        assert_eq!(fetched.id, "cs_123");
        assert_eq!(fetched.url, None);
        assert_eq!(fetched.subscription.as_deref(), Some("sub_123"));
        assert_eq!(fetched.client_reference_id, None);

        let created = (client.create_checkout_session)(
            CreateCheckoutSessionRequest {
                success_url: "https://example.com/ok".to_string(),
                cancel_url: "https://example.com/no".to_string(),
                line_items: vec![],
                mode: crate::checkout::CheckoutMode::Payment,
                client_reference_id: None,
                customer_email: None,
                trial_period_days: None,
            },
            key(),
        )
        .await
        .unwrap();
        assert_eq!(created.id, "cs_123");
        assert_eq!(created.url.as_deref(), Some("/checkout.session/url"));
        assert_eq!(created.subscription, None);
    }

    #[tokio::test]
    async fn test_mock_get_subscription_ignores_inputs() {
        let client = Client::mock();
        let sub = (client.get_subscription)("anything".to_string(), key())
            .await
            .unwrap();
        assert_eq!(sub.id, "sub_123");
        assert_eq!(sub.status, SubscriptionStatus::Trialing);
        assert_eq!(sub.customer, "cus_123");
    }

    #[tokio::test]
    async fn test_mock_billing_portal_session() {
        let client = Client::mock();
        let session = (client.create_billing_portal_session)("cus_x".to_string(), key())
            .await
            .unwrap();
        assert_eq!(session.id, "bps_123");
        assert_eq!(session.url, "/billing_portal.session/url");
    }

    #[tokio::test]
    async fn test_single_slot_substitution() {
        let mut client = Client::mock();
        client.create_refund = Arc::new(|payment_intent_id, _| {
            Box::pin(async move {
                Ok(Refund {
                    id: format!("re_for_{payment_intent_id}"),
                })
            })
        });

        let refund = (client.create_refund)("pi_42".to_string(), key())
            .await
            .unwrap();
        assert_eq!(refund.id, "re_for_pi_42");

        // Every other slot keeps its mock behavior.
        let sub = (client.get_subscription)("sub_x".to_string(), key())
            .await
            .unwrap();
        assert_eq!(sub.id, "sub_123");
    }

    #[test]
    fn test_construction_is_clonable_and_opaque() {
        let client = Client::mock();
        let cloned = client.clone();
        assert_eq!(format!("{cloned:?}"), "Client { .. }");
    }
}
