//! The live operations.
//!
//! Each operation is a free async function over (domain inputs, secret key)
//! with a fixed (method, path, encoding) triple: it builds the form body,
//! attaches the Basic credential, runs one transport exchange, and decodes
//! the response. No operation retries, caches, or depends on another
//! operation's result.

use crate::auth::SecretKey;
use crate::checkout::{CheckoutSession, CreateCheckoutSessionRequest};
use crate::decode::decode_response;
use crate::error::Result;
use crate::params::FormBody;
use crate::payment::{Metadata, Money, PaymentIntent};
use crate::portal::BillingPortalSession;
use crate::refund::Refund;
use crate::subscription::Subscription;
use crate::transport::{Method, Transport, TransportRequest};

/// Fixed host for every operation.
pub(crate) const API_BASE_URL: &str = "https://api.stripe.com";

/// Compose an authenticated request for a transport.
fn authorized<'a>(
    method: Method,
    url: &'a str,
    key: &SecretKey,
    body: Option<FormBody>,
) -> TransportRequest<'a> {
    let mut headers = vec![("Authorization", key.basic_auth())];
    let body = body.map(|body| body.encode());
    if body.is_some() {
        headers.push((
            "Content-Type",
            "application/x-www-form-urlencoded".to_string(),
        ));
    }
    TransportRequest {
        method,
        url,
        headers,
        body,
    }
}

/// Create a payment intent for the given amount.
///
/// `POST /v1/payment_intents`
pub async fn create_payment_intent<T: Transport + ?Sized>(
    transport: &T,
    money: Money,
    metadata: &Metadata,
    key: &SecretKey,
) -> Result<PaymentIntent> {
    let mut body = FormBody::new()
        .pair("amount", &money.amount.to_string())
        .pair("currency", money.currency.as_str());
    for (name, value) in metadata {
        body = body.pair(format!("metadata[{name}]"), value);
    }
    let url = format!("{API_BASE_URL}/v1/payment_intents");
    let response = transport
        .execute(authorized(Method::Post, &url, key, Some(body)))
        .await?;
    decode_response(&response)
}

/// Cancel a payment intent.
///
/// `POST /v1/payment_intents/{id}/cancel`
pub async fn cancel_payment_intent<T: Transport + ?Sized>(
    transport: &T,
    id: &str,
    key: &SecretKey,
) -> Result<PaymentIntent> {
    let url = format!("{API_BASE_URL}/v1/payment_intents/{id}/cancel");
    let response = transport
        .execute(authorized(Method::Post, &url, key, None))
        .await?;
    decode_response(&response)
}

/// Refund a payment intent in full.
///
/// `POST /v1/refunds`
pub async fn create_refund<T: Transport + ?Sized>(
    transport: &T,
    payment_intent_id: &str,
    key: &SecretKey,
) -> Result<Refund> {
    let body = FormBody::new().pair("payment_intent", payment_intent_id);
    let url = format!("{API_BASE_URL}/v1/refunds");
    let response = transport
        .execute(authorized(Method::Post, &url, key, Some(body)))
        .await?;
    decode_response(&response)
}

/// Retrieve a checkout session.
///
/// `GET /v1/checkout/sessions/{id}`
pub async fn get_checkout_session<T: Transport + ?Sized>(
    transport: &T,
    id: &str,
    key: &SecretKey,
) -> Result<CheckoutSession> {
    let url = format!("{API_BASE_URL}/v1/checkout/sessions/{id}");
    let response = transport
        .execute(authorized(Method::Get, &url, key, None))
        .await?;
    decode_response(&response)
}

/// Create a checkout session.
///
/// `POST /v1/checkout/sessions`
///
/// Line items are encoded as `line_items[i][quantity]` / `line_items[i][price]`
/// in input order; absent optional fields contribute nothing to the body.
pub async fn create_checkout_session<T: Transport + ?Sized>(
    transport: &T,
    request: &CreateCheckoutSessionRequest,
    key: &SecretKey,
) -> Result<CheckoutSession> {
    let mut body = FormBody::new()
        .pair("success_url", &request.success_url)
        .pair("cancel_url", &request.cancel_url)
        .pair("mode", request.mode.as_str());
    for (index, item) in request.line_items.iter().enumerate() {
        body = body
            .pair(
                format!("line_items[{index}][quantity]"),
                &item.quantity.to_string(),
            )
            .pair(format!("line_items[{index}][price]"), &item.price_id);
    }
    if let Some(email) = &request.customer_email {
        body = body.email("customer_email", email);
    }
    if let Some(days) = request.trial_period_days {
        body = body.pair("subscription_data[trial_period_days]", &days.to_string());
    }
    if let Some(reference) = &request.client_reference_id {
        body = body.pair("client_reference_id", reference);
    }
    let url = format!("{API_BASE_URL}/v1/checkout/sessions");
    let response = transport
        .execute(authorized(Method::Post, &url, key, Some(body)))
        .await?;
    decode_response(&response)
}

/// Retrieve a subscription.
///
/// `GET /v1/subscriptions/{id}`
pub async fn get_subscription<T: Transport + ?Sized>(
    transport: &T,
    id: &str,
    key: &SecretKey,
) -> Result<Subscription> {
    let url = format!("{API_BASE_URL}/v1/subscriptions/{id}");
    let response = transport
        .execute(authorized(Method::Get, &url, key, None))
        .await?;
    decode_response(&response)
}

/// Create a billing portal session for a customer.
///
/// `POST /v1/billing_portal/sessions`
pub async fn create_billing_portal_session<T: Transport + ?Sized>(
    transport: &T,
    customer_id: &str,
    key: &SecretKey,
) -> Result<BillingPortalSession> {
    let body = FormBody::new().pair("customer", customer_id);
    let url = format!("{API_BASE_URL}/v1/billing_portal/sessions");
    let response = transport
        .execute(authorized(Method::Post, &url, key, Some(body)))
        .await?;
    decode_response(&response)
}
