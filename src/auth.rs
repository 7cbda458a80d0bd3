//! Secret key handling and Basic-credential conversion.

use base64::{engine::general_purpose::STANDARD, Engine};
use secrecy::{ExposeSecret, SecretString};

/// Secret API key for the payments service.
///
/// The key is held as a [`SecretString`] so it cannot leak through `Debug`
/// output. [`SecretKey::basic_auth`] is the single place the raw key is
/// read; it must never appear in error values or logs.
///
/// # Example
///
/// ```rust,ignore
/// let key = SecretKey::new(std::env::var("STRIPE_SECRET_KEY")?);
/// assert!(key.is_test_mode() || key.is_live_mode());
/// ```
#[derive(Debug, Clone)]
pub struct SecretKey(SecretString);

impl SecretKey {
    /// Wrap a raw secret key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::new(key.into()))
    }

    /// Whether this is a test-mode key (`sk_test_` or `rk_test_`).
    #[must_use]
    pub fn is_test_mode(&self) -> bool {
        let key = self.0.expose_secret();
        key.starts_with("sk_test_") || key.starts_with("rk_test_")
    }

    /// Whether this is a live-mode key (`sk_live_` or `rk_live_`).
    #[must_use]
    pub fn is_live_mode(&self) -> bool {
        let key = self.0.expose_secret();
        key.starts_with("sk_live_") || key.starts_with("rk_live_")
    }

    /// Render the key as an HTTP Basic `Authorization` header value.
    ///
    /// The key is the username and the password is empty, per the service's
    /// authentication scheme.
    #[must_use]
    pub fn basic_auth(&self) -> String {
        let credentials = format!("{}:", self.0.expose_secret());
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

impl From<String> for SecretKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&str> for SecretKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}
