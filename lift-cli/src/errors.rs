use lift_client::errors::ClientError;
use std::time::Duration;
use thiserror::Error;

/// Failures a command can end with. Each handler wraps the first one it hits
/// with its own prefix and returns it unchanged.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("connection failed with address {address}")]
    ConnectionFailed {
        address: String,
        #[source]
        source: ClientError,
    },

    #[error("stream creation failed for stream {stream}")]
    StreamCreationFailed {
        stream: String,
        #[source]
        source: ClientError,
    },

    #[error("invalid ack policy: {0}")]
    InvalidAckPolicy(String),

    #[error("unable to subscribe to stream {stream}")]
    SubscriptionFailed {
        stream: String,
        #[source]
        source: ClientError,
    },

    #[error("delivery failed for stream {stream}")]
    DeliveryError {
        stream: String,
        #[source]
        source: ClientError,
    },

    #[error("metadata request failed")]
    MetadataFetchFailed(#[source] ClientError),

    #[error("cursor {cursor_id} request failed for stream {stream} partition {partition}")]
    CursorOperationFailed {
        cursor_id: String,
        stream: String,
        partition: i32,
        #[source]
        source: ClientError,
    },

    #[error("request on stream {stream} failed")]
    RequestFailed {
        stream: String,
        #[source]
        source: ClientError,
    },

    #[error("{operation} did not complete within {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    #[error("unable to write output")]
    Output(#[from] std::io::Error),
}

/// A received activity stream message that could not be turned into an event.
/// Never ends a subscription.
#[derive(Debug, Error)]
pub(crate) enum DecodeError {
    #[error("malformed payload: {0}")]
    Malformed(#[from] prost::DecodeError),

    #[error("{0} event carries no operation details")]
    MissingOperation(&'static str),
}
