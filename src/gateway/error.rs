//! Error taxonomy for the remote gateway.

use thiserror::Error;

/// Errors from a single gateway invocation.
///
/// These never reach the UI: action creators log the detail and dispatch a
/// generic error outcome instead. A failed call is terminal for that
/// invocation; there are no retries and no backoff.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced a response.
    #[error("request to '{resource}' failed: {source}")]
    Transport {
        resource: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success HTTP status.
    #[error("'{resource}' returned HTTP {status}")]
    Status { resource: &'static str, status: u16 },

    /// The response body did not match the expected envelope shape.
    #[error("could not decode '{resource}' response: {source}")]
    Decode {
        resource: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The envelope reported an application-level failure.
    #[error("'{resource}' rejected the request: {message}")]
    Rejected {
        resource: &'static str,
        message: String,
    },

    /// A success envelope arrived without the payload it promised.
    #[error("'{resource}' response carried no data")]
    MissingData { resource: &'static str },
}
