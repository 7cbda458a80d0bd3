//! Form-encoded request body construction.
//!
//! The payments API accepts `application/x-www-form-urlencoded` bodies where
//! nested structures are flattened into bracketed keys: a sequence field
//! becomes `line_items[0][quantity]`, `line_items[0][price]`, ... in input
//! order, and a mapping field becomes `metadata[k]` per entry.

use std::fmt;

use url::form_urlencoded;

/// Ordered builder for form-encoded request bodies.
///
/// Values are percent-encoded per standard form-encoding rules when pushed.
/// Keys are pushed as given: the bracket syntax is part of the wire protocol
/// and is never re-encoded. Optional inputs that are absent must simply not
/// be pushed, so they contribute zero pairs.
#[derive(Debug, Clone, Default)]
pub struct FormBody {
    pairs: Vec<(String, String)>,
}

impl FormBody {
    /// Create an empty body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one key/value pair, form-encoding the value.
    #[must_use]
    pub fn pair(mut self, key: impl Into<String>, value: &str) -> Self {
        self.pairs.push((key.into(), encode_value(value)));
        self
    }

    /// Append an email-valued pair.
    ///
    /// Every literal `+` in the value is rendered as `%2b` in the encoded
    /// output; form-decoding on the remote side would otherwise read the
    /// plus sign as a space. The rest of the value is form-encoded normally.
    #[must_use]
    pub fn email(mut self, key: impl Into<String>, value: &str) -> Self {
        let encoded = value
            .split('+')
            .map(encode_value)
            .collect::<Vec<_>>()
            .join("%2b");
        self.pairs.push((key.into(), encoded));
        self
    }

    /// The encoded pairs, in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Whether no pairs have been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render the body as `key=value` pairs joined by `&`.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}

impl fmt::Display for FormBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Form-encode a single value.
fn encode_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
