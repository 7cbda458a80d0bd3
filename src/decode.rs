//! Response decoding.
//!
//! Interprets a raw transport response as a typed success value or a typed
//! failure. Decoding is pure and synchronous: it performs no I/O and
//! introduces no suspension point.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ApiError, Error, Result};
use crate::transport::TransportResponse;

/// Wire envelope wrapping service-reported errors.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

/// Decode a raw response into `T` or a typed failure.
///
/// For non-success statuses (>= 300), the body is first read as the
/// service's error envelope; an unparseable envelope degrades to
/// [`Error::Unknown`] carrying the body text. For success statuses, a body
/// that does not match `T` is an [`Error::Decode`]: a client/schema bug,
/// never a business error.
pub fn decode_response<T: DeserializeOwned>(response: &TransportResponse) -> Result<T> {
    if response.status >= 300 {
        return Err(match serde_json::from_slice::<ErrorEnvelope>(&response.body) {
            Ok(envelope) => Error::Api(envelope.error),
            Err(_) => Error::Unknown {
                message: std::str::from_utf8(&response.body).ok().map(str::to_owned),
            },
        });
    }

    serde_json::from_slice(&response.body).map_err(|source| Error::Decode {
        body: String::from_utf8_lossy(&response.body).into_owned(),
        source,
    })
}
